// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod chrome;
pub mod locator;
pub mod traits;
pub mod wait;

pub use chrome::ChromeDriver;
pub use locator::{Locator, Strategy};
pub use traits::{Condition, Driver, DriverError, ElementState};
pub use wait::{wait_until, WaitConfig};
