//! Common constants used throughout bakehook.

/// Lifecycle hooks recognised in the hooks directory.
pub const HOOKS: [&str; 2] = ["pre_gen_project", "post_gen_project"];

/// Name of the pre-generation hook
pub const PRE_GEN_PROJECT: &str = "pre_gen_project";

/// Name of the post-generation hook
pub const POST_GEN_PROJECT: &str = "post_gen_project";

/// Directory, relative to the template root, holding hook scripts
pub const HOOKS_DIR: &str = "hooks";

/// Serializer tag registered by every facade
pub const DEFAULT_SERIALIZER_TYPE: &str = "json";

/// Context key that disables template rendering of hook scripts when truthy
pub const RUN_HOOK_IN_PLACE: &str = "_run_hook_in_place";

/// Supported configuration file names
pub const CONFIG_FILES: [&str; 3] = ["bakehook.json", "bakehook.yml", "bakehook.yaml"];

/// Separates the serializer tag from its payload in an envelope
pub const TYPE_SEPARATOR: char = '|';

/// Closes an envelope
pub const PAYLOAD_TERMINATOR: char = '$';
