//! Extensions rendering program data as [`tabby::Table`]s.

mod palette_ext;

pub use self::palette_ext::PaletteExt;
