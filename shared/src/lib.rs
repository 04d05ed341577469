pub mod water;

pub use water::{
    render_frame, water_color, ConfigError, Frame, ShaderInputs, WaterConfig, WaterFragment,
};
