pub(crate) mod recommendations_model;
pub(crate) mod recommendations_service;
pub(crate) mod recommendations_traits;

pub use recommendations_model::BestValueProduct;
pub use recommendations_service::RecommendationService;
pub use recommendations_traits::RecommendationServiceTrait;
