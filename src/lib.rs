// clippy
#![cfg_attr(
    feature = "cargo-clippy",
    allow(
        clippy::upper_case_acronyms,
        clippy::many_single_char_names,
        clippy::too_many_arguments,
        clippy::excessive_precision,
        clippy::float_cmp
    )
)]

pub mod core;
pub mod pbrtparser;
pub mod materials;
pub mod shapes;
pub mod cameras;
pub mod textures;
pub mod lights;
