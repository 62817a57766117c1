use bitflags::bitflags;

bitflags! {
    /// Collision categories. A body has one category in `collision_type` and
    /// lists the categories it reacts to in `collision_mask`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CollisionType: u32 {
        const NO_OBJECT = 0;
        const PLAYER = 1;
        const NPC = 2;
        const ENEMY = 4;
        const COLLECTABLE = 8;
        const ACTION = 16;
        const PROJECTILE = 32;
        const WORLD_SHAPE = 64;
        const ALL = 0xFFFF_FFFF;
    }
}

impl Default for CollisionType {
    fn default() -> Self {
        CollisionType::ENEMY
    }
}
