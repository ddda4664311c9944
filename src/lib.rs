//! # modkit
//!
//! **modkit** - support library for game mods that supplies integer block vectors and
//! conditional mod targeting.
//!

#![warn(missing_docs, clippy::missing_docs_in_private_items)] // `missing_docs`
#![warn(unused_import_braces, unused_qualifications, unused_results)] // `unused_*`
#![warn(trivial_casts, trivial_numeric_casts)] // `casts`
#![warn(missing_copy_implementations, missing_debug_implementations)] // `missing_*_implementations`
#![warn(variant_size_differences, unreachable_pub)]

// crates
extern crate log;
extern crate regex;
extern crate regex_syntax;
extern crate serde;

// cores
pub mod mathcore;
pub mod modcore;
