//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 데이터를 전송하기 위한 객체들을 정의하는 모듈입니다.
//! 클라이언트와 서버 간의 데이터 계약(Contract)을 명확히 정의합니다.
//!
//! ## 설계 원칙
//!
//! - **내부 표현 vs 외부 표현**: Entity와 DTO의 명확한 분리
//! - **보안**: 응답 DTO에는 비밀번호 관련 필드가 아예 존재하지 않음
//! - **검증 내장**: `validator` derive와 명시적 `into_*` 변환 메서드
//!
//! ## 모듈 구조
//!
//! ```text
//! dto/
//! ├── common/             # {status, data, message} 응답 래퍼
//! ├── users/
//! │   ├── request/        # 회원가입, 로그인, 수정, 팔로우
//! │   └── response/       # UserResponse, LoginResponse
//! └── posts/
//!     ├── request/        # 게시물, 댓글, 검색 쿼리
//!     └── response/       # PostResponse, CommentResponse, LikeResponse
//! ```

pub mod common;
pub mod users;
pub mod posts;
