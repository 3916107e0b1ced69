//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`string_utils`] - 문자열 검증, 정리, 검색 패턴 이스케이프
//! - [`timeout`] - 저장소 호출 시간 제한
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::string_utils::validate_required_string;
//!
//! let clean_name = validate_required_string(Some("  John  "), "name")?;
//! ```

pub mod string_utils;
pub mod timeout;
