mod description;
mod ladder;
mod presets;
#[cfg(test)]
mod tests;

pub use description::{x_range_for_domain, AxisDescription};
pub use ladder::{AxisLadder, LadderRule};
pub use presets::{
    SUM_Y_AXIS_DEFAULT_LEVEL, SUM_Y_AXIS_LADDER, X_AXIS_DEFAULT_LEVEL, X_AXIS_LADDER,
};
