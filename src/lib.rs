//! 챔버 계산 로직을 라이브러리로 분리하여 CLI 와 대화형 메뉴가 함께 쓴다.

pub mod app;
pub mod chamber;
pub mod cli;
pub mod config;
pub mod conversion;
pub mod i18n;
pub mod quantity;
pub mod ui_cli;
pub mod units;
