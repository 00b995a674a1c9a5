//! Skycast - terminal weather forecast client
//!
//! Data flow: a city name is dispatched as [`action::Action::ForecastRequest`],
//! the reducer moves the [`request::ForecastRequest`] to `Loading` and declares
//! an [`effect::Effect::FetchForecast`], the effect handler runs the
//! [`api::ForecastProvider`] on a task, and the tagged result settles the
//! request. Each forecast day is paired with a [`visual::VisualDescriptor`]
//! and animated by the [`motion`] engine.

pub mod action;
pub mod api;
pub mod components;
pub mod config;
pub mod effect;
pub mod forecast;
pub mod logging;
pub mod motion;
pub mod reducer;
pub mod request;
pub mod sprites;
pub mod state;
pub mod visual;
