mod baker;
mod group_max;
mod honest;

pub use baker::{
    DEFAULT_GROUP_SIZE, DishonestProcess, dishonest_process, honest_process,
    seeded_dishonest_process, seeded_honest_process,
};
pub use group_max::{GroupMax, GroupMaxExt};
pub use honest::HonestProcess;
