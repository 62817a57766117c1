#[derive(Debug, Clone)]
pub struct Config {
    /// Node slots reserved up front so early frames do not grow the arena.
    pub pool_size: usize,
    /// A leaf splits once it holds more than this many objects.
    pub max_objects_per_node: usize,
    /// Nodes at this depth never split and accept any number of objects.
    pub max_depth: u32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            pool_size: 64,
            max_objects_per_node: 4,
            max_depth: 4,
        }
    }
}
