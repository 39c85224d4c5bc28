mod defaults;
mod loader;
mod model;

pub use defaults::{BUNDLED_STANDARDS, bundled_rule_set};
pub use loader::{
    FileRuleLoader, FileSystem, RealFileSystem, RuleLoader, STRUCTURE_STANDARDS_FILE,
    UV_STANDARDS_FILE,
};
pub use model::{
    FileRequirement, ManifestRequirements, Overlay, RequirementKind, RuleSet, StructureRules,
    UvRequirements,
};
