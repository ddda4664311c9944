//! `modcore::targets` submodule implements [`TargetedMod`] trait, which describes mod that
//! other code (usually mixins) depends on, and functions that find those mods among jars.
//!
//! Jar paths are inspected lexically: files are never opened, so paths of jars that do not exist
//! are handled the same way as paths of existing ones.
//!

use crate::modcore::predicates::{ConditionError, ConditionSpec, NameCondition};
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Extension of files that can contain mods.
///
pub const JAR_EXTENSION: &str = "jar";

/// Returns file name of path without its extension.
///
/// Only the last extension is removed, and file name without dots is returned as is.
///
/// # Example
/// ```rust
/// # use modkit::modcore::targets::jar_base_name;
/// # use std::path::Path;
/// assert_eq!(jar_base_name(Path::new("mods/NotEnoughItems-1.0.5.jar")), "NotEnoughItems-1.0.5");
/// assert_eq!(jar_base_name(Path::new("mods/archive.tar.gz")), "archive.tar");
/// assert_eq!(jar_base_name(Path::new("mods/README")), "README");
/// ```
///
pub fn jar_base_name(path: &Path) -> String {
    let file_name = file_name(path);
    match file_name.rfind('.') {
        Some(index) => file_name[..index].to_string(),
        None => file_name,
    }
}
/// Returns extension of the file name of path (text after the last dot).
///
/// Empty string is returned if file name has no dots.
///
/// # Example
/// ```rust
/// # use modkit::modcore::targets::jar_extension;
/// # use std::path::Path;
/// assert_eq!(jar_extension(Path::new("mods/NotEnoughItems-1.0.5.jar")), "jar");
/// assert_eq!(jar_extension(Path::new("mods/README")), "");
/// ```
///
pub fn jar_extension(path: &Path) -> String {
    let file_name = file_name(path);
    match file_name.rfind('.') {
        Some(index) => file_name[index + 1..].to_string(),
        None => String::new(),
    }
}
/// Returns last component of path as string (lossy for non-UTF-8 names).
///
fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// [`TargetedMod`] trait is implemented on objects that describe mod which can be present
/// in the game.
///
/// Implementors provide mod name, condition on jar names and development loading flag,
/// and [`TargetedMod::is_matching_jar`] decides whether jar belongs to the mod.
///
/// # Example
/// ```rust
/// # use modkit::modcore::{predicates::starts_with, targets::{ModTarget, TargetedMod}};
/// # use std::path::Path;
/// let optifine: ModTarget = ModTarget::new("OptiFine", starts_with("optifine"), false);
/// assert!(optifine.is_matching_jar(Path::new("mods/OptiFine_1.7.10_HD_U_E7.jar")));
/// assert!(!optifine.is_matching_jar(Path::new("mods/OptiFine_1.7.10_HD_U_E7.zip")));
/// ```
///
pub trait TargetedMod {
    /// Human-readable name of the mod.
    ///
    fn mod_name(&self) -> &str;
    /// Condition that lower-cased jar name (without extension) should satisfy.
    ///
    fn condition(&self) -> &NameCondition;
    /// Whether the mod is considered present in development environment regardless of jars.
    ///
    fn is_load_in_development(&self) -> bool;

    /// Checks whether file at given path is a jar of this mod.
    ///
    /// File is a jar of the mod if its extension is exactly [`JAR_EXTENSION`]
    /// and its lower-cased name satisfies [`TargetedMod::condition`].
    ///
    fn is_matching_jar(&self, path: &Path) -> bool {
        if jar_extension(path) != JAR_EXTENSION {
            trace!(
                "`{}` is not a jar, skipping it for `{}`",
                path.display(),
                self.mod_name()
            );
            return false;
        }

        let name = jar_base_name(path).to_lowercase();
        let is_matching = self.condition().test(&name);
        trace!(
            "jar `{}` (`{name}`) {} `{}`",
            path.display(),
            if is_matching { "matches" } else { "does not match" },
            self.mod_name()
        );
        is_matching
    }
}
impl<T: TargetedMod + ?Sized> TargetedMod for Box<T> {
    fn mod_name(&self) -> &str {
        (**self).mod_name()
    }
    fn condition(&self) -> &NameCondition {
        (**self).condition()
    }
    fn is_load_in_development(&self) -> bool {
        (**self).is_load_in_development()
    }

    fn is_matching_jar(&self, path: &Path) -> bool {
        (**self).is_matching_jar(path)
    }
}

/// [`ModTargetSpec`] struct describes [`ModTarget`] as plain data,
/// so targets can be listed in configuration.
///
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ModTargetSpec {
    /// Name of the mod.
    ///
    pub mod_name: String,
    /// Condition on jar names.
    ///
    pub condition: ConditionSpec,
    /// Whether the mod is loaded in development environment.
    ///
    #[serde(default)]
    pub load_in_development: bool,
}

/// [`ModTarget`] struct is the basic implementor of [`TargetedMod`] trait.
///
#[derive(Clone, Debug)]
pub struct ModTarget {
    /// Name of the mod.
    ///
    mod_name: String,
    /// Condition on jar names.
    ///
    condition: NameCondition,
    /// Whether the mod is loaded in development environment.
    ///
    load_in_development: bool,
}
impl ModTarget {
    /// Constructs new target.
    ///
    pub fn new(
        mod_name: impl Into<String>,
        condition: NameCondition,
        load_in_development: bool,
    ) -> Self {
        ModTarget {
            mod_name: mod_name.into(),
            condition,
            load_in_development,
        }
    }
    /// Constructs target from its description.
    ///
    /// This function fails if condition of description cannot be compiled.
    ///
    /// # Example
    /// ```rust
    /// # use modkit::modcore::{predicates::{ConditionKind, ConditionSpec}, targets::{ModTarget, ModTargetSpec, TargetedMod}};
    /// let spec: ModTargetSpec = ModTargetSpec {
    ///     mod_name: String::from("Thaumcraft"),
    ///     condition: ConditionSpec { kind: ConditionKind::StartsWith, pattern: String::from("thaumcraft") },
    ///     load_in_development: true,
    /// };
    /// let target: ModTarget = ModTarget::from_spec(&spec).expect("Spec should be correct");
    /// assert_eq!(target.mod_name(), "Thaumcraft");
    /// assert!(target.is_load_in_development());
    /// ```
    ///
    pub fn from_spec(spec: &ModTargetSpec) -> Result<Self, ConditionError> {
        Ok(ModTarget::new(
            spec.mod_name.as_str(),
            spec.condition.compile()?,
            spec.load_in_development,
        ))
    }
}
impl TargetedMod for ModTarget {
    fn mod_name(&self) -> &str {
        &self.mod_name
    }
    fn condition(&self) -> &NameCondition {
        &self.condition
    }
    fn is_load_in_development(&self) -> bool {
        self.load_in_development
    }
}
impl TryFrom<ModTargetSpec> for ModTarget {
    type Error = ConditionError;

    fn try_from(spec: ModTargetSpec) -> Result<Self, Self::Error> {
        ModTarget::from_spec(&spec)
    }
}

/// [`LoadEnvironment`] enum lists environments in which game can be launched.
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum LoadEnvironment {
    /// Regular game installation; mods are detected only by their jars.
    ///
    #[default]
    Production,
    /// Development workspace; mods flagged with [`TargetedMod::is_load_in_development`] are
    /// considered present even without jars.
    ///
    Development,
}

/// Returns targets that are present in the game.
///
/// Target is present if any of `jars` matches it or, in [`LoadEnvironment::Development`],
/// if it is flagged with [`TargetedMod::is_load_in_development`].
/// Returned targets keep the order of `targets`, and each of them is returned once.
///
/// # Example
/// ```rust
/// # use modkit::modcore::{predicates::{contains, starts_with}, targets::{detect_targets, LoadEnvironment, ModTarget, TargetedMod}};
/// let targets: Vec<ModTarget> = vec![
///     ModTarget::new("OptiFine", starts_with("optifine"), false),
///     ModTarget::new("GregTech", contains("gregtech"), true),
/// ];
/// let jars = ["mods/OptiFine_1.7.10_HD_U_E7.jar", "mods/journeymap-1.7.10.jar"];
///
/// let present = detect_targets(&targets, &jars, LoadEnvironment::Production);
/// assert_eq!(present.len(), 1);
/// assert_eq!(present[0].mod_name(), "OptiFine");
///
/// let present = detect_targets(&targets, &jars, LoadEnvironment::Development);
/// assert_eq!(present.len(), 2);
/// ```
///
pub fn detect_targets<'a, T: TargetedMod, P: AsRef<Path>>(
    targets: &'a [T],
    jars: &[P],
    environment: LoadEnvironment,
) -> Vec<&'a T> {
    targets
        .iter()
        .filter(|target| {
            if environment == LoadEnvironment::Development && target.is_load_in_development() {
                debug!(
                    "`{}` is loaded in development environment",
                    target.mod_name()
                );
                return true;
            }
            let matching_jar = jars
                .iter()
                .map(|jar| AsRef::<Path>::as_ref(jar))
                .find(|jar| target.is_matching_jar(jar));
            match matching_jar {
                Some(jar) => {
                    debug!("`{}` detected in `{}`", target.mod_name(), jar.display());
                    true
                }
                None => false,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{
        detect_targets, jar_base_name, jar_extension, LoadEnvironment, ModTarget, ModTargetSpec,
        TargetedMod,
    };
    use crate::modcore::predicates::{
        contains, custom, matches, starts_with, ConditionKind, ConditionSpec,
    };
    use std::path::{Path, PathBuf};

    #[test]
    fn file_names() {
        let path = Path::new("/home/player/.minecraft/mods/Baubles-1.7.10-1.0.1.10.jar");
        assert_eq!(jar_base_name(path), "Baubles-1.7.10-1.0.1.10");
        assert_eq!(jar_extension(path), "jar");

        let hidden = Path::new("mods/.jar");
        assert_eq!(jar_base_name(hidden), "");
        assert_eq!(jar_extension(hidden), "jar");

        let no_extension = Path::new("mods/Baubles");
        assert_eq!(jar_base_name(no_extension), "Baubles");
        assert_eq!(jar_extension(no_extension), "");

        let trailing_dot = Path::new("Baubles.");
        assert_eq!(jar_base_name(trailing_dot), "Baubles");
        assert_eq!(jar_extension(trailing_dot), "");

        assert_eq!(jar_base_name(Path::new("")), "");
        assert_eq!(jar_extension(Path::new("/")), "");
    }

    #[test]
    fn matching_jar() {
        let target = ModTarget::new("OptiFine", starts_with("optifine"), false);
        assert!(target.is_matching_jar(Path::new("mods/OptiFine_1.7.10_HD_U_E7.jar")));
        assert!(target.is_matching_jar(Path::new("optifine.jar")));
        assert!(!target.is_matching_jar(Path::new("mods/OptiFine_1.7.10_HD_U_E7.zip")));
        assert!(!target.is_matching_jar(Path::new("mods/OptiFine_1.7.10_HD_U_E7.JAR")));
        assert!(!target.is_matching_jar(Path::new("mods/OptiFine_1.7.10_HD_U_E7")));
        assert!(!target.is_matching_jar(Path::new("optifine/FastCraft.jar")));

        // pattern is not lower-cased, only jar name is
        let upper = ModTarget::new("OptiFine", starts_with("OptiFine"), false);
        assert!(!upper.is_matching_jar(Path::new("OptiFine_1.7.10.jar")));

        let regex = ModTarget::new(
            "IC2",
            matches(r"industrialcraft-2-.*").expect("Pattern should be correct"),
            false,
        );
        assert!(regex.is_matching_jar(Path::new("IndustrialCraft-2-2.2.827-experimental.jar")));
        assert!(!regex.is_matching_jar(Path::new("ic2-addon-industrialcraft-2.jar")));
    }

    #[test]
    fn boxed_targets() {
        let targets: Vec<Box<dyn TargetedMod>> = vec![
            Box::new(ModTarget::new("Tinkers", contains("tconstruct"), false)),
            Box::new(ModTarget::new(
                "Thaumcraft",
                custom(|name| name.starts_with("thaumcraft-1.7.10")),
                false,
            )),
        ];
        let jars = vec![PathBuf::from("mods/Thaumcraft-1.7.10-4.2.3.5.jar")];

        let present = detect_targets(&targets, &jars, LoadEnvironment::Production);
        assert_eq!(present.len(), 1);
        assert_eq!(present[0].mod_name(), "Thaumcraft");
    }

    #[test]
    fn detection() {
        let targets = vec![
            ModTarget::new("GregTech", contains("gregtech"), false),
            ModTarget::new("OptiFine", starts_with("optifine"), true),
            ModTarget::new("FastCraft", starts_with("fastcraft"), false),
        ];
        let jars = [
            "mods/fastcraft-1.25.jar",
            "mods/gregtech-5.09.41.jar",
            "mods/gregtech-5.09.41-sources.jar",
        ];

        let names = |environment| {
            detect_targets(&targets, &jars, environment)
                .into_iter()
                .map(|target| target.mod_name())
                .collect::<Vec<&str>>()
        };
        assert_eq!(names(LoadEnvironment::default()), ["GregTech", "FastCraft"]);
        assert_eq!(
            names(LoadEnvironment::Development),
            ["GregTech", "OptiFine", "FastCraft"]
        );

        let empty: [&str; 0] = [];
        assert!(detect_targets(&targets, &empty, LoadEnvironment::Production).is_empty());
    }

    #[test]
    fn target_spec() {
        let spec = ModTargetSpec {
            mod_name: String::from("NotEnoughItems"),
            condition: ConditionSpec {
                kind: ConditionKind::Matches,
                pattern: String::from(r"notenoughitems-.*"),
            },
            load_in_development: false,
        };
        let target = ModTarget::try_from(spec.clone()).expect("Spec should be correct");
        assert_eq!(target.mod_name(), "NotEnoughItems");
        assert!(!target.is_load_in_development());
        assert!(target.is_matching_jar(Path::new("NotEnoughItems-1.7.10-1.0.5.120.jar")));

        let bytes = serde_cbor::to_vec(&spec).expect("`ModTargetSpec` should be serializable");
        let restored: ModTargetSpec =
            serde_cbor::from_slice(&bytes).expect("`ModTargetSpec` should be deserializable");
        assert_eq!(restored, spec);

        let invalid = ModTargetSpec {
            condition: ConditionSpec {
                kind: ConditionKind::Matches,
                pattern: String::from("(unclosed"),
            },
            ..spec
        };
        assert!(ModTarget::from_spec(&invalid).is_err());
    }
}
