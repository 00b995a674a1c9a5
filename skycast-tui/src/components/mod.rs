pub mod city_input;
pub mod day_card;
pub mod forecast_body;
pub mod forecast_header;
pub mod forecast_screen;
pub mod help_bar;

pub use tui_dispatch::Component;

pub use city_input::{CityInput, CityInputProps};
pub use day_card::{DayCard, DayCardProps};
pub use forecast_body::{ForecastBody, ForecastBodyProps};
pub use forecast_header::{ForecastHeader, ForecastHeaderProps};
pub use forecast_screen::{ForecastScreen, ForecastScreenProps, SPINNERS, page_days};
pub use help_bar::{HelpBar, HelpBarProps};
