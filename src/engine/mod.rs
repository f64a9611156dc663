// Engine modules: frame timing, input, tile physics, render boundary

pub mod game_loop;
pub mod input;
pub mod physics;
pub mod renderer;
