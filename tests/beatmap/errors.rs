use osu_rs::beatmap::prelude::*;
use pretty_assertions::assert_eq;

use crate::parse_events_err;

#[test]
fn unknown_object_code() {
    let err = parse_events_err("[Events]\nSpriteX,Pass,Centre,\"a.png\"\n");
    assert_eq!(err.line(), 2);
    assert_eq!(
        err.content(),
        &EventsError::UnrecognizedCode {
            code: "SpriteX".into(),
            line: 2,
        }
    );
}

#[test]
fn unknown_command_code() {
    let err = parse_events_err("[Events]\nSprite,Pass,Centre,\"a.png\"\n X,0,0,0,1\n");
    assert!(matches!(
        err.content(),
        EventsError::UnrecognizedCode { code, line: 3 } if code == "X"
    ));
}

#[test]
fn command_codes_are_case_sensitive() {
    let err = parse_events_err("[Events]\nSprite,Pass,Centre,\"a.png\"\n f,0,0,0,1\n");
    assert!(matches!(err.content(), EventsError::UnrecognizedCode { .. }));
}

#[test]
fn command_without_owner() {
    let err = parse_events_err("[Events]\n0,0,\"bg.jpg\",0,0\n F,0,0,100,1\n");
    assert_eq!(
        err.into_content(),
        EventsError::MalformedIndentation { line: 3, depth: 1 }
    );

    let err = parse_events_err("[Events]\n_M,0,0,100,1,1\n");
    assert_eq!(
        err.into_content(),
        EventsError::MalformedIndentation { line: 2, depth: 1 }
    );
}

#[test]
fn unindented_command_is_an_unknown_object() {
    let err = parse_events_err("[Events]\nSprite,Pass,Centre,\"a.png\"\nF,0,0,100,1\n");
    assert!(matches!(
        err.content(),
        EventsError::UnrecognizedCode { code, .. } if code == "F"
    ));
}

#[test]
fn bad_fields_name_their_index() {
    let cases = [
        ("Sprite,Nowhere,Centre,\"a.png\"", 1),
        ("Sprite,Pass,Middle,\"a.png\"", 2),
        ("Sprite,Pass,Centre,\"a.png\",inf", 4),
        ("Sample,0,0,\"a.wav\",101", 4),
        ("Animation,Pass,Centre,\"a.png\",0,0,4", 7),
        ("Break,100", 2),
    ];
    for (line, field) in cases {
        let err = parse_events_err(&format!("[Events]\n{line}\n"));
        let EventsError::FieldFormat { field: actual, .. } = err.content() else {
            panic!("expected a field error for {line:?}, got {err:?}");
        };
        assert_eq!(*actual, field, "{line}");
    }
}

#[test]
fn bad_command_values() {
    let cases = [
        (" F,99,0,100,1", 1),
        (" F,0,zero,100,1", 2),
        (" F,0,0,100", 4),
        (" M,0,0,100,1,y", 5),
        (" C,0,0,100,255,300,0", 5),
        (" P,0,0,100,X", 4),
        (" L,0", 2),
        (" T,,0", 1),
    ];
    for (line, field) in cases {
        let err = parse_events_err(&format!("[Events]\nSprite,Pass,Centre,\"a.png\"\n{line}\n"));
        let EventsError::FieldFormat { field: actual, .. } = err.content() else {
            panic!("expected a field error for {line:?}, got {err:?}");
        };
        assert_eq!(*actual, field, "{line}");
    }
}

#[test]
fn first_error_wins() {
    let result = parse_beatmap("[Events]\nSprite,Pass,Centre,\"a.png\"\n F,0,x,,1\n Q,0\n");
    let Err(BeatmapError::Events(err)) = result else {
        panic!("expected an events error");
    };
    assert_eq!(err.line(), 3);
}

#[test]
fn error_messages() {
    let err = parse_events_err("[Events]\nSprite,Pass,Centre,\"a.png\"\n F,0,zero,100,1\n");
    assert_eq!(
        err.content().to_string(),
        "invalid field 2 `zero` of `F` at line 3, expected start time"
    );
}
