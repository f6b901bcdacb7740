pub mod game;
pub mod session;
pub mod snake;
pub mod term;

/// Playfield coordinates. Signed so that candidate head positions one step
/// outside the field are representable before the wall check rejects them.
pub type Coord = (i16, i16);
