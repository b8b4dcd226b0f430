//! # configure-win64
//!
//! Configures the native `win-X86_64` Release build with CMake and the
//! Ninja generator.
//!
//! The argument list is fixed: source tree `..`, generator `Ninja`, the TR1
//! deprecation warning silenced through `CMAKE_CXX_FLAGS`, `Release` build
//! type, cross-compiling off and platform `win-X86_64`. Run it from a build
//! directory one level below the source tree, after the MSVC environment
//! (`vcvarsall.bat x64`) has been activated in the same shell.
//!
//! ## Quick Start
//!
//! ```no_run
//! use configure_win64::ConfigureInvoker;
//!
//! let result = ConfigureInvoker::default()
//!     .set_current_dir("./build")
//!     .run();
//!
//! if let Err(e) = result {
//!     std::process::exit(e.exit_code());
//! }
//! ```
//!
//! ```no_run
//! use configure_win64::ConfigureInvoker;
//!
//! // Background thread, one result on the channel
//! let rx = ConfigureInvoker::default().spawn();
//!
//! let result = rx.recv().unwrap();
//! assert!(result.is_ok());
//! ```

pub mod cmake;
pub mod cmd;
pub mod error;

pub use cmake::CommandInvocation;
pub use cmd::ConfigureInvoker;
pub use error::ProcessFailure;
