use osu_rs::beatmap::prelude::*;
use pretty_assertions::assert_eq;

use crate::parse_events;

fn commands_of(events: &Events, index: usize) -> &CommandList {
    events.objects[index]
        .commands()
        .unwrap_or_else(|| panic!("object {index} should own commands"))
}

#[test]
fn nested_loops_and_triggers() {
    const SRC: &str = r#"
[Events]
Sprite,Foreground,Centre,"sb/ring.png",320,240
 L,0,2
  S,0,0,100,1,2
  L,0,3
   R,0,0,50,0,1
  F,0,0,100,1
 T,Passing,0,1000
  T,HitSoundWhistle,0,500
   MY,0,0,100,0,50
 F,0,2000,,0
"#;
    let events = parse_events(SRC);
    let outer = commands_of(&events, 0);
    assert_eq!(outer.len(), 3);

    let Command::Loop(repeat) = &outer[0] else {
        panic!("expected a loop");
    };
    let codes = repeat.commands.iter().map(Command::code).collect::<Vec<_>>();
    assert_eq!(codes, vec!["S", "L", "F"]);
    assert_eq!(repeat.commands[1].commands().map(Vec::len), Some(1));

    let Command::Trigger(passing) = &outer[1] else {
        panic!("expected a trigger");
    };
    assert_eq!(passing.group_number, None);
    let Command::Trigger(whistle) = &passing.commands[0] else {
        panic!("expected a nested trigger");
    };
    assert_eq!(whistle.trigger_type, "HitSoundWhistle");
    assert_eq!(
        whistle.commands,
        vec![Command::MoveY(Transition::new(
            Easing::Linear,
            0,
            100,
            0.0,
            50.0
        ))]
    );

    assert_eq!(outer[2], Command::Fade(Transition::hold(2000, 2000, 0.0)));
}

#[test]
fn underscores_and_spaces_mix() {
    let events = parse_events(
        "[Events]\nSprite,Pass,Centre,\"a.png\",0,0\n_L,0,2\n _F,0,0,10,1\n  MX,0,0,10,5\n_ F,0,20,,1\n",
    );
    let outer = commands_of(&events, 0);
    assert_eq!(outer.len(), 1);
    assert_eq!(outer[0].commands().map(Vec::len), Some(3));
}

#[test]
fn dedent_closes_scope() {
    let events = parse_events(
        "[Events]\nSprite,Pass,Centre,\"a.png\",0,0\n L,0,2\n  F,0,0,10,1\n M,0,0,10,1,2\nSprite,Fail,Centre,\"b.png\",0,0\n F,0,0,10,1\n",
    );
    assert_eq!(events.objects.len(), 2);
    assert_eq!(commands_of(&events, 0).len(), 2);
    assert_eq!(commands_of(&events, 1).len(), 1);
}

#[test]
fn deeper_lines_join_innermost_scope() {
    let events = parse_events(
        "[Events]\nSprite,Pass,Centre,\"a.png\",0,0\n   F,0,0,10,1\n F,0,20,30,1\n",
    );
    assert_eq!(commands_of(&events, 0).len(), 2);
}

#[test]
fn empty_loop_is_kept() {
    let events = parse_events(
        "[Events]\nSprite,Pass,Centre,\"a.png\",0,0\n L,100,5\n F,0,0,10,1\n",
    );
    let outer = commands_of(&events, 0);
    assert_eq!(
        outer[0],
        Command::Loop(LoopCommand {
            start_time: 100,
            loop_count: 5,
            commands: vec![],
        })
    );
    assert_eq!(outer[0].end_time(), 100);
}

#[test]
fn animation_owns_commands() {
    let events = parse_events(
        "[Events]\nAnimation,Background,TopLeft,\"sb/a.png\",0,0,3,40\n C,0,0,,255,0,0\n P,0,0,100,V\n",
    );
    let EventObject::Animation(animation) = &events.objects[0] else {
        panic!("expected an animation");
    };
    assert_eq!(animation.loop_type, LoopType::LoopForever);
    assert_eq!(
        animation.commands,
        vec![
            Command::Color(Transition::hold(0, 0, Rgb::new(255, 0, 0))),
            Command::Parameter(ParameterCommand {
                easing: Easing::Linear,
                start_time: 0,
                end_time: 100,
                parameter: Parameter::Vertical,
            }),
        ]
    );
}

#[test]
fn indentation_only_lines_are_skipped() {
    const SRC: &str = "[Events]\nSprite,Pass,Centre,\"a.png\",0,0\n__\n F,0,0,10,1\n _\n";
    let events = parse_events(SRC);
    assert_eq!(events.objects.len(), 1);
    assert_eq!(commands_of(&events, 0).len(), 1);
}
