use osu_rs::beatmap::prelude::*;
use pretty_assertions::assert_eq;

#[test]
fn substitutes_before_parsing() {
    const SRC: &str = r#"osu file format v14
[Variables]
$layer=Foreground
$pos=320,240
$ring="sb/ring.png"

[Events]
Sprite,$layer,Centre,$ring,$pos
 F,0,0,100,1
"#;
    let BeatmapOutput { beatmap, warnings } = parse_beatmap(SRC).unwrap();
    assert_eq!(warnings, vec![]);
    assert_eq!(beatmap.variables.get("pos"), Some("320,240"));
    let EventObject::Sprite(sprite) = &beatmap.events.objects[0] else {
        panic!("expected a sprite");
    };
    assert_eq!(sprite.layer, Layer::Foreground);
    assert_eq!(sprite.filepath, "sb/ring.png");
    assert_eq!((sprite.x, sprite.y), (320.0, 240.0));
}

#[test]
fn replacement_is_not_rescanned() {
    let variables = [("$a", "$b"), ("$b", "x")]
        .into_iter()
        .collect::<VariableTable>();
    let (line, undefined) = variables.substitute("Sprite,$a,$b");
    assert_eq!(line, "Sprite,$b,x");
    assert!(undefined.is_empty());
}

#[test]
fn undefined_variable_is_kept_and_warned() {
    const SRC: &str = "osu file format v14\n[Events]\nSprite,Pass,Centre,$missing,0,0\n";
    let BeatmapOutput { beatmap, warnings } = parse_beatmap(SRC).unwrap();
    let EventObject::Sprite(sprite) = &beatmap.events.objects[0] else {
        panic!("expected a sprite");
    };
    assert_eq!(sprite.filepath, "$missing");

    let [BeatmapWarning::Events(warning)] = warnings.as_slice() else {
        panic!("expected one events warning, got {warnings:?}");
    };
    assert_eq!(warning.line(), 3);
    assert_eq!(
        warning.content(),
        &EventsWarning::UndefinedVariable {
            name: "missing".into()
        }
    );
    assert_eq!(&SRC[warning.range()], "Sprite,Pass,Centre,$missing,0,0");
}

#[test]
fn malformed_variable_line_is_skipped() {
    const SRC: &str = "osu file format v14\n[Variables]\n$good=a.png\nbroken\n[Events]\nSprite,Pass,Centre,$good\n";
    let BeatmapOutput { beatmap, warnings } = parse_beatmap(SRC).unwrap();
    assert_eq!(beatmap.variables.len(), 1);
    assert_eq!(
        warnings,
        vec![BeatmapWarning::Attribute(
            AttributeWarning::Malformed {
                section: "Variables".into(),
                separator: '=',
            }
            .into_wrapper_at(4, 44..50)
        )]
    );
}

#[test]
fn variables_apply_inside_nested_commands() {
    const SRC: &str = "[Variables]\n$spin=0,0,500,0,2.5\n[Events]\nSprite,Pass,Centre,\"a.png\"\n L,0,2\n  R,$spin\n";
    let BeatmapOutput { beatmap, .. } = parse_beatmap(SRC).unwrap();
    let commands = beatmap.events.objects[0].commands().unwrap();
    assert_eq!(
        commands[0].commands().unwrap()[0],
        Command::Rotate(Transition::new(Easing::Linear, 0, 500, 0.0, 2.5))
    );
}
