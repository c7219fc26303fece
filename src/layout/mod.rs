pub mod engine;
pub mod lcg;
pub mod region;

pub use engine::{
    derive_seed, icon_count, layout_result, place_icons, PlateGeometry, ICON_SIZE_MIN,
    ICON_SIZE_SPAN, MAX_ICONS_PER_INGREDIENT, MAX_PLACEMENT_ATTEMPTS, RIM_MARGIN_FACTOR,
    SCATTER_RADIUS_FACTOR,
};
pub use lcg::SeededRandom;
pub use region::region_accepts;
