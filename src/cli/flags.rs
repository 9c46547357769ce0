use passforge::pass::ClassSet;

#[derive(Debug, Default)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub quiet: bool,
    pub clipboard: bool,
    pub save: bool,
    pub default: bool,
    pub unique: bool,
    pub entropy: bool,
    pub hw: bool,
    /// Raw length text; validated by the generator.
    pub length: Option<String>,
    pub number: Option<usize>,
    pub classes: Option<ClassSet>,
    /// Classes switched off with `--no-*`.
    pub without: ClassSet,
    pub output: Option<String>,
}
