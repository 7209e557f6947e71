//! The osu! beatmap (`.osu`) and storyboard (`.osb`) parser.
//!
//! # Usage
//!
//! ```
//! use osu_rs::beatmap::{BeatmapOutput, parse_beatmap};
//!
//! let source = "osu file format v14\n\n[Events]\nSprite,Background,Centre,\"sb/bg.png\",320,240\n F,0,0,1000,0,1\n";
//! let BeatmapOutput { beatmap, warnings } = parse_beatmap(source).unwrap();
//! assert_eq!(beatmap.events.objects.len(), 1);
//! assert!(warnings.is_empty());
//! println!("{}", beatmap.events);
//! ```
//!
//! The [`beatmap::events`] module holds the storyboard model, which can be parsed from and
//! serialized back into the `[Events]` section text. Other sections are parsed into simple typed
//! tables.
//!
//! # Features
//!
//! - `serde`: derives `Serialize`/`Deserialize` on the output models.
//! - `diagnostics` (default): renders errors and warnings with [`ariadne`](https://docs.rs/ariadne).
#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod beatmap;
pub mod diagnostics;
