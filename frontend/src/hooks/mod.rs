pub mod use_carousel;
pub mod use_scroll;

pub use use_carousel::{use_carousel, CarouselHandle};
pub use use_scroll::{use_on_screen, use_pin_trigger, use_window_scroll};
