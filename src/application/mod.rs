//! # Application Layer
//!
//! Use case orchestration and application services.
//!
//! This layer coordinates domain objects to perform business operations,
//! handling validation, persistence and event publishing.
//!
//! ## Use Cases
//!
//! - [`CreateTradeUseCase`]: open a new trade negotiation
//! - [`ApplyTradeActionUseCase`]: apply a party's action to a trade
//! - [`ListActionsUseCase`]: compute a viewer's action menu

pub mod dto;
pub mod error;
pub mod use_cases;

pub use dto::{
    AvailableActionsResponse, CreateTradeRequest, CreateTradeResponse, TradeActionRequest,
    TradeActionResponse,
};
pub use error::{ApplicationError, ApplicationResult};
pub use use_cases::{
    ApplyTradeActionUseCase, AvailableActionsRequest, CreateTradeUseCase, ListActionsUseCase,
    TradeEventPublisher,
};
