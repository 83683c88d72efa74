// ABOUTME: Small stateless helpers shared by the stream bot.
// ABOUTME: Provides sequence normalization, falsy filtering, intersection, truncation, delay parsing and link matching.

pub mod collections;
pub mod delay;
pub mod error;
pub mod links;
pub mod text;

pub use collections::{filter_out_falsy, get_intersection, to_array, OneOrMany, Truthy};
pub use delay::{parse_delay, parse_delay_duration, Unit};
pub use error::DelayError;
pub use links::{is_twitch_vod_link, is_youtube_link, twitch_vod_id, youtube_video_id};
pub use text::shorten;
