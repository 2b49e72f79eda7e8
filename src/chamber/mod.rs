//! 정적 플럭스 챔버 설계 모듈 모음.
//! Nickerson(2016) MDF 식과 그 역산, 원통 형상 계산, 규격 직경 목록, 설계 보고로 구성한다.

pub mod catalog;
pub mod design;
pub mod geometry;
pub mod mdf;

pub use catalog::*;
pub use design::*;
pub use geometry::*;
pub use mdf::*;
