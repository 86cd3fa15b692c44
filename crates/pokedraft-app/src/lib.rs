// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

pub mod cancel;
pub mod candidate;
pub mod forms;
pub mod navigation;
pub mod scroll;
pub mod selection;
pub mod sentinel;
pub mod state;
pub mod window;

pub use cancel::*;
pub use candidate::*;
pub use forms::*;
pub use navigation::*;
pub use scroll::*;
pub use selection::*;
pub use sentinel::*;
pub use state::*;
pub use window::*;
