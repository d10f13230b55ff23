use thiserror::Error;

/// The ways that a hex grid operation can fail. Both of these are caller bugs:
/// an operation was handed coordinates or an index that can't exist on the
/// grid. Nothing in this crate ever silently corrects them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum HexError {
    /// The three cube components don't fall on the plane `x + y + z = 0`, or
    /// `x + y` doesn't fit in an `i32`
    #[error(
        "invalid cell ({x}, {y}, {z}); must be on the plane x+y+z=0 within \
        i32 range"
    )]
    InvalidCell { x: i32, y: i32, z: i32 },

    /// A side index outside `0..=5` was given
    #[error("attempt to get neighbor {0} out of range; sides are numbered 0-5")]
    SideOutOfRange(u8),
}
