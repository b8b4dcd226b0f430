use serde::Serialize;

/// Generator executable looked up on the search path.
pub const CMAKE: &str = "cmake";

/// Source tree, relative to the build directory the tool runs in.
pub const SOURCE_DIR: &str = "..";

pub const GENERATOR: &str = "Ninja";

pub const CXX_FLAGS: &str = "-DCMAKE_CXX_FLAGS=/D_SILENCE_TR1_NAMESPACE_DEPRECATION_WARNING";
pub const BUILD_TYPE: &str = "-DCMAKE_BUILD_TYPE=Release";
pub const CROSSCOMPILING: &str = "-DCMAKE_CROSSCOMPILING=FALSE";
pub const PLATFORM: &str = "-DPLATFORM=win-X86_64";

const CONFIGURE_ARGS: [&str; 7] = [
    SOURCE_DIR,
    "-G",
    GENERATOR,
    CXX_FLAGS,
    BUILD_TYPE,
    CROSSCOMPILING,
    PLATFORM,
];

/// A program plus the fixed configure arguments handed to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandInvocation {
    program: String,
    args: Vec<&'static str>,
}

impl CommandInvocation {
    pub fn configure() -> Self {
        Self::with_program(CMAKE)
    }

    /// Same arguments, different executable.
    pub(crate) fn with_program<T>(program: T) -> Self
    where
        T: Into<String>, {
        Self {
            program: program.into(),
            args: CONFIGURE_ARGS.to_vec(),
        }
    }

    pub fn get_program(&self) -> &str {
        &self.program
    }

    pub fn get_args(&self) -> &[&'static str] {
        &self.args
    }

    /// Program followed by every argument, in order.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.program.as_str()).chain(self.args.iter().copied())
    }

    pub fn display(&self) -> String {
        self.tokens().collect::<Vec<_>>().join(" ")
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl Default for CommandInvocation {
    fn default() -> Self {
        Self::configure()
    }
}
