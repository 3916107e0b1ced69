//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 핵심 모듈로, 저장되는 엔티티와 API 경계의 데이터 계약을 담당합니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities      - 영속 객체 (User, Post, Comment, Like)
//! ├── DTOs          - 데이터 전송 객체 (Request/Response)
//! └── Models        - 인증 모델 (토큰 클레임, 인증된 사용자)
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```
//!
//! ## 모듈 구성
//!
//! ### [`entities`] - 핵심 도메인 엔티티
//!
//! MongoDB(또는 인메모리 저장소)에 저장되는 객체들입니다.
//! 엔티티는 외부로 직접 직렬화되지 않고 항상 응답 DTO로 변환됩니다.
//! 특히 `User.password_hash`는 어떤 응답 DTO에도 존재하지 않습니다.
//!
//! ### [`dto`] - 데이터 전송 객체
//!
//! 요청 본문을 받아 검증하고, 응답을 `{status, data, message}` 형식으로 내보냅니다.
//!
//! ### [`models`] - 인증 모델
//!
//! JWT 클레임과 요청 확장(extensions)에 붙는 [`AuthenticatedUser`](models::auth::AuthenticatedUser)를 정의합니다.

pub mod entities;
pub mod dto;
pub mod models;
