//! The parser takes `&str`, so other encodings are decoded by the caller.

use encoding_rs::WINDOWS_1252;
use osu_rs::beatmap::prelude::*;
use pretty_assertions::assert_eq;

#[test]
fn latin1_decoded_by_caller() {
    let bytes = include_bytes!("files/latin1.osu");
    assert!(std::str::from_utf8(bytes).is_err());

    let (source, _, had_errors) = WINDOWS_1252.decode(bytes);
    assert!(!had_errors);
    let BeatmapOutput { beatmap, warnings } = parse_beatmap(&source).unwrap();
    assert_eq!(warnings, vec![]);
    assert_eq!(beatmap.metadata.title.as_deref(), Some("Café Olé"));
    assert_eq!(beatmap.metadata.artist.as_deref(), Some("Déjà Vu"));
    let EventObject::Sprite(sprite) = &beatmap.events.objects[0] else {
        panic!("expected a sprite");
    };
    assert_eq!(sprite.filepath, "sb/café.png");
}

#[test]
fn byte_order_mark_and_crlf() {
    let source = "\u{feff}osu file format v12\r\n[Events]\r\nSprite,Pass,Centre,\"a.png\",0,0\r\n F,0,0,100,1\r\n";
    let BeatmapOutput { beatmap, warnings } = parse_beatmap(source).unwrap();
    assert_eq!(warnings, vec![]);
    assert_eq!(beatmap.format_version, 12);
    assert_eq!(
        beatmap.events.objects[0].commands().map(Vec::len),
        Some(1)
    );
}
