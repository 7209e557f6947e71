use osu_rs::beatmap::prelude::*;
use pretty_assertions::assert_eq;

use crate::parse_events;

fn roundtrip_events(source: &str) {
    let BeatmapOutput { beatmap, .. } = parse_beatmap(source).unwrap();
    let written = beatmap.events.to_string();

    let mut reparsed = parse_events(&written);
    reparsed.sort();
    assert_eq!(reparsed, beatmap.events);
    assert_eq!(reparsed.to_string(), written);
}

#[test]
fn roundtrip_storyboard_file() {
    roundtrip_events(include_str!("files/storyboard.osb"));
}

#[test]
fn roundtrip_beatmap_file() {
    roundtrip_events(include_str!("files/beatmap.osu"));
}

#[test]
fn writes_canonical_storyboard() {
    let BeatmapOutput { beatmap, .. } =
        parse_beatmap(include_str!("files/storyboard.osb")).unwrap();
    assert_eq!(
        beatmap.events.to_string(),
        r#"[Events]
Sprite,Background,TopLeft,"sb/sky.png",0,0
 F,0,0,2000,0,1
 S,0,0,,0.625
Sprite,Background,Centre,"sb/star.png",320,240
 T,HitSoundClap,0,60000,1
  C,0,0,100,255,255,255,255,200,0
 M,0,1000,2000,320,240,400,200
 L,1000,4
  R,0,0,500,0,6.2832
  F,0,0,250,1,0.5,1
Animation,Pass,BottomCentre,"sb/dance.png",320,480,8,80,LoopOnce
 MX,1,500,1500,100,540
 P,0,500,1500,H
Sample,1500,0,"sb/drum.wav",100
Sample,3000,3,"sb/clap.wav",70
//Storyboard Sound Samples
"#
    );
}

#[test]
fn empty_events_still_have_frame() {
    assert_eq!(
        Events::default().to_string(),
        format!("{EVENTS_HEADER}\n{EVENTS_SENTINEL}\n")
    );
}

#[test]
fn legacy_codes_become_names() {
    let events = parse_events(
        "[Events]\n0,0,\"bg.jpg\"\n1,100,\"v.avi\",10,20\n2,5000,6000\n4,Foreground,TopRight,\"a.png\",1.5,2\n6,Fail,Custom,\"f.png\",0,0,4,50\n5,0,Pass,\"s.ogg\",0\n",
    );
    assert_eq!(
        events.to_string(),
        "[Events]
Background,0,\"bg.jpg\",0,0
Video,100,\"v.avi\",10,20
Break,5000,6000
Sprite,Foreground,TopRight,\"a.png\",1.5,2
Animation,Fail,Custom,\"f.png\",0,0,4,50,LoopForever
Sample,0,2,\"s.ogg\",0
//Storyboard Sound Samples
"
    );
}

#[test]
fn keeps_keyframes_and_collapses_holds() {
    let events = parse_events(
        "[Events]\nSprite,Pass,Centre,\"a.png\",0,0\n F,0,100,100,0.5,0.5\n MX,3,0,200,10,20,30,40\n V,0,0,0,1,1\n",
    );
    let written = events.to_string();
    let lines = written.lines().collect::<Vec<_>>();
    assert_eq!(
        lines,
        vec![
            "[Events]",
            "Sprite,Pass,Centre,\"a.png\",0,0",
            " F,0,100,,0.5",
            " MX,3,0,200,10,20,30,40",
            " V,0,0,,1,1",
            "//Storyboard Sound Samples",
        ]
    );
}
