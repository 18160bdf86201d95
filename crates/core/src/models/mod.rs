pub mod album;
pub mod sample_pack;
pub mod sound;
pub mod track;

pub use album::{Album, PopulatedAlbum};
pub use sample_pack::{PopulatedSamplePack, SamplePack};
pub use sound::Sound;
pub use track::Track;
