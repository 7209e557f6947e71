//! The prelude exposes everything needed to build and write events by hand.

use osu_rs::beatmap::prelude::*;
use pretty_assertions::assert_eq;

#[test]
fn build_events_by_hand() {
    let mut spin = LoopCommand {
        start_time: 1000,
        loop_count: 2,
        commands: vec![],
    };
    spin.commands
        .push(Command::Rotate(Transition::new(Easing::QuadInOut, 0, 500, 0.0, 1.5)));

    let sprite = Sprite {
        layer: Layer::Foreground,
        origin: Origin::BottomCentre,
        filepath: "sb/star.png".into(),
        x: 320.0,
        y: 480.0,
        commands: vec![
            Command::Move(Transition::hold(
                0,
                0,
                Vector2::from((320.0, 480.0)),
            )),
            Command::Loop(spin),
            Command::Trigger(TriggerCommand {
                trigger_type: "Failing".into(),
                start_time: 0,
                end_time: 5000,
                group_number: None,
                commands: vec![Command::Parameter(ParameterCommand {
                    easing: Easing::Linear,
                    start_time: 0,
                    end_time: 0,
                    parameter: Parameter::AdditiveColour,
                })],
            }),
        ],
    };
    let events = Events::from(vec![
        EventObject::Sprite(sprite),
        EventObject::Break(Break {
            start_time: 2000,
            end_time: 4000,
        }),
        EventObject::Video(Media {
            start_time: 0,
            filename: "v.mp4".into(),
            x_offset: 0,
            y_offset: 0,
        }),
    ]);
    assert_eq!(events.objects[0].commands().unwrap()[1].end_time(), 2000);

    let mut sorted = events.clone();
    sorted.sort();
    assert_eq!(
        sorted.to_string(),
        "[Events]
Video,0,\"v.mp4\",0,0
Break,2000,4000
Sprite,Foreground,BottomCentre,\"sb/star.png\",320,480
 M,0,0,,320,480
 T,Failing,0,5000
  P,0,0,,A
 L,1000,2
  R,5,0,500,0,1.5
//Storyboard Sound Samples
"
    );
}

#[test]
fn kinds_and_codes() {
    for kind in EventKind::ALL {
        assert_eq!(EventKind::try_from(kind.name()), Ok(kind));
        assert_eq!(
            EventKind::try_from(kind.legacy_code().to_string().as_str()),
            Ok(kind)
        );
    }
    for code in Command::CODES {
        assert!(Command::is_command_code(code));
    }
    assert!(!Command::is_command_code("Sprite"));
}
