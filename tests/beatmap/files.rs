use osu_rs::beatmap::prelude::*;
use pretty_assertions::assert_eq;

#[test]
fn storyboard_file() {
    let source = include_str!("files/storyboard.osb");
    let BeatmapOutput { beatmap, warnings } = parse_beatmap(source).unwrap();
    assert_eq!(
        warnings,
        vec![BeatmapWarning::MissingFormatVersion {
            assumed: DEFAULT_FORMAT_VERSION
        }]
    );
    assert_eq!(beatmap.variables.len(), 2);

    let kinds = beatmap
        .events
        .iter()
        .map(EventObject::kind)
        .collect::<Vec<_>>();
    assert_eq!(
        kinds,
        vec![
            EventKind::Sprite,
            EventKind::Sprite,
            EventKind::Animation,
            EventKind::Sample,
            EventKind::Sample,
        ]
    );

    let EventObject::Sprite(star) = &beatmap.events.objects[1] else {
        panic!("expected the star sprite");
    };
    assert_eq!(star.filepath, "sb/star.png");
    assert_eq!(star.origin, Origin::Centre);
    let codes = star.commands.iter().map(Command::code).collect::<Vec<_>>();
    assert_eq!(codes, vec!["T", "M", "L"]);

    let Command::Loop(spin) = &star.commands[2] else {
        panic!("expected a loop");
    };
    assert_eq!(spin.loop_count, 4);
    assert_eq!(spin.commands.len(), 2);
    assert_eq!(star.commands[2].end_time(), 3000);

    let Command::Trigger(clap) = &star.commands[0] else {
        panic!("expected a trigger");
    };
    assert_eq!(clap.trigger_type, "HitSoundClap");
    assert_eq!(clap.group_number, Some(1));

    let EventObject::Sample(drum) = &beatmap.events.objects[3] else {
        panic!("expected the drum sample");
    };
    assert_eq!(
        drum,
        &Sample {
            time: 1500,
            layer: Layer::Background,
            filepath: "sb/drum.wav".into(),
            volume: DEFAULT_SAMPLE_VOLUME,
        }
    );
}

#[test]
fn beatmap_file() {
    let source = include_str!("files/beatmap.osu");
    let BeatmapOutput { beatmap, warnings } = parse_beatmap(source).unwrap();
    assert_eq!(warnings, vec![]);
    assert_eq!(beatmap.format_version, 14);

    assert_eq!(beatmap.general.audio_filename.as_deref(), Some("audio.mp3"));
    assert_eq!(beatmap.general.preview_time, 64200);
    assert_eq!(beatmap.general.countdown, Countdown::None);
    assert_eq!(beatmap.general.sample_set, SampleSet::Soft);
    assert_eq!(beatmap.general.mode, GameMode::Standard);
    assert!(beatmap.general.letterbox_in_breaks);
    assert!(beatmap.general.widescreen_storyboard);
    assert!(!beatmap.general.epilepsy_warning);

    assert_eq!(beatmap.editor.bookmarks, vec![1000, 2000, 3000]);
    assert_eq!(beatmap.editor.beat_divisor, Some(4));
    assert_eq!(beatmap.editor.grid_size, Some(8));

    assert_eq!(
        beatmap.metadata.title.as_deref(),
        Some("Operation: Zenithfall")
    );
    assert_eq!(beatmap.metadata.source, None);
    assert_eq!(beatmap.metadata.tags, vec!["electronic", "night", "drive"]);
    assert_eq!(beatmap.metadata.beatmap_id, Some(123456));
    assert_eq!(beatmap.metadata.beatmap_set_id, Some(65432));

    assert_eq!(beatmap.difficulty.circle_size, 4.0);
    assert_eq!(beatmap.difficulty.slider_multiplier, 1.8);

    let names = beatmap
        .colours
        .iter()
        .map(|colour| colour.name.as_str())
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["Combo1", "Combo2", "SliderBorder"]);
    assert_eq!(beatmap.colours[1].colour, Rgb::new(0, 202, 0));

    assert_eq!(beatmap.timing_points.len(), 2);
    assert_eq!(
        beatmap.hit_objects[1],
        "100,100,1400,2,0,B|200:200|300:100,1,200"
    );

    assert_eq!(
        beatmap.events.to_string(),
        "[Events]
Background,0,\"bg.jpg\",0,0
Video,-200,\"intro.mp4\",0,0
Break,30000,35000
Sprite,Background,Centre,\"sb/glow.png\",320,240
 F,0,30000,35000,0,1
//Storyboard Sound Samples
"
    );
}
