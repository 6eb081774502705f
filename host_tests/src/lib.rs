#![allow(dead_code)]

extern crate thiserror;

#[path = "../../src/hardware/camera/board.rs"]
mod board;
#[path = "../../src/hardware/camera/config.rs"]
mod config;
#[path = "../../src/core/config_validation.rs"]
mod config_validation;
#[path = "../../src/hardware/camera/controller.rs"]
mod controller;
#[path = "../../src/hardware/camera/driver.rs"]
mod driver;
#[path = "../../src/core/frame_summary.rs"]
mod frame_summary;
#[path = "../../src/hardware/camera/types.rs"]
mod types;

// `crate::hardware::camera` 経由で参照しているモジュール向け
mod hardware {
    pub mod camera {
        pub use crate::driver::FrameBuffer;
        pub use crate::types::{FrameSize, PixelFormat};
    }
}
