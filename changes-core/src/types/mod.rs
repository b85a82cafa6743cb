// changes-core/src/types/mod.rs

pub mod chord_event;
pub mod degree;
pub mod key;
pub mod offset;
pub mod quality;
pub mod token;

pub use chord_event::ChordEvent;
pub use degree::{Accidental, DegreeHead, ScaleDegree};
pub use key::{Key, Mode};
pub use offset::{bar_start, offset, Offset};
pub use quality::Quality;
pub use token::Token;
