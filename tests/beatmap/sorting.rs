use osu_rs::beatmap::prelude::*;
use pretty_assertions::assert_eq;

use crate::parse_events;

const SRC: &str = r#"[Events]
Sample,300,0,"late.wav"
Sprite,Pass,Centre,"b.png",0,0
 F,0,900,1000,1
 L,200,2
  F,0,50,100,1
  F,0,0,10,1
Sample,100,0,"early.wav"
Sprite,Pass,Centre,"a.png",0,0
 F,0,500,600,1
Break,0,1000
0,0,"bg.jpg",0,0
"#;

fn kinds(events: &Events) -> Vec<EventKind> {
    events.iter().map(EventObject::kind).collect()
}

fn paths(events: &Events) -> Vec<String> {
    events
        .iter()
        .filter_map(|object| match object {
            EventObject::Sprite(sprite) => Some(sprite.filepath.clone()),
            EventObject::Sample(sample) => Some(sample.filepath.clone()),
            _ => None,
        })
        .collect()
}

#[test]
fn canonical_order() {
    let mut events = parse_events(SRC);
    events.sort();
    assert_eq!(
        kinds(&events),
        vec![
            EventKind::Background,
            EventKind::Break,
            EventKind::Sprite,
            EventKind::Sprite,
            EventKind::Sample,
            EventKind::Sample,
        ]
    );
    assert_eq!(
        paths(&events),
        vec!["b.png", "a.png", "early.wav", "late.wav"]
    );

    let EventObject::Sprite(b) = &events.objects[2] else {
        panic!("expected a sprite");
    };
    let starts = b.commands.iter().map(Command::start_time).collect::<Vec<_>>();
    assert_eq!(starts, vec![200, 900]);
    let nested = b.commands[0]
        .commands()
        .unwrap()
        .iter()
        .map(Command::start_time)
        .collect::<Vec<_>>();
    assert_eq!(nested, vec![50, 0]);
}

#[test]
fn nested_lists_on_request() {
    let mut events = parse_events(SRC);
    events.sort_with(&CanonicalOrder {
        sort_nested: true,
        ..CanonicalOrder::default()
    });
    let EventObject::Sprite(b) = &events.objects[2] else {
        panic!("expected a sprite");
    };
    let nested = b.commands[0]
        .commands()
        .unwrap()
        .iter()
        .map(Command::start_time)
        .collect::<Vec<_>>();
    assert_eq!(nested, vec![0, 50]);
}

#[test]
fn custom_ranks() {
    let mut events = parse_events(SRC);
    events.sort_with(&CanonicalOrder {
        ranks: [
            EventKind::Sample,
            EventKind::Sprite,
            EventKind::Animation,
            EventKind::Break,
            EventKind::Video,
            EventKind::Background,
        ],
        ..CanonicalOrder::default()
    });
    assert_eq!(kinds(&events).first(), Some(&EventKind::Sample));
    assert_eq!(kinds(&events).last(), Some(&EventKind::Background));
}

#[test]
fn first_command_sees_sorted_list() {
    let mut events = parse_events(
        "[Events]\nSprite,Pass,Centre,\"a.png\"\n F,0,300,,1\nSprite,Pass,Centre,\"b.png\"\n F,0,900,,1\n F,0,100,,1\n",
    );
    let mut by_first = events.clone();
    by_first.sort_with(&CanonicalOrder {
        sprite_start: SpriteStart::First,
        ..CanonicalOrder::default()
    });
    events.sort();
    assert_eq!(paths(&events), vec!["b.png", "a.png"]);
    // Command lists are sorted before objects, so `First` sees 100 as well.
    assert_eq!(paths(&by_first), vec!["b.png", "a.png"]);
}

#[test]
fn source_order_policy() {
    let mut events = parse_events(SRC);
    let before = events.clone();
    events.sort_with(&KeepSourceOrder);
    assert_eq!(events, before);
}

/// Samples after everything else, latest first.
struct SamplesLastReversed;

impl SortPolicy for SamplesLastReversed {
    fn kind_rank(&self, kind: EventKind) -> usize {
        usize::from(kind == EventKind::Sample)
    }

    fn effective_start(&self, object: &EventObject) -> i32 {
        -object.own_start_time().unwrap_or(0)
    }
}

#[test]
fn policy_trait_defaults() {
    let mut events = parse_events(SRC);
    events.sort_with(&SamplesLastReversed);
    assert_eq!(
        kinds(&events),
        vec![
            EventKind::Sprite,
            EventKind::Sprite,
            EventKind::Break,
            EventKind::Background,
            EventKind::Sample,
            EventKind::Sample,
        ]
    );
    assert_eq!(
        paths(&events),
        vec!["b.png", "a.png", "late.wav", "early.wav"]
    );
}
