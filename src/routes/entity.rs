//! Entity CRUD routes: one collection and one item route per resource.

use crate::handlers::entity::{create, delete, list, read, update};
use crate::models::{Entity, Offer, Order, User};
use crate::state::AppState;
use axum::{routing::get, Router};

fn resource<E: Entity>(router: Router<AppState>) -> Router<AppState> {
    let collection = format!("/{}", E::TABLE);
    let item = format!("/{}/:id", E::TABLE);
    router
        .route(&collection, get(list::<E>).post(create::<E>))
        .route(&item, get(read::<E>).put(update::<E>).delete(delete::<E>))
}

/// `/users`, `/orders`, `/offers` and their `/{id}` item routes.
pub fn entity_routes(state: AppState) -> Router {
    let router = Router::new();
    let router = resource::<User>(router);
    let router = resource::<Order>(router);
    let router = resource::<Offer>(router);
    router.with_state(state)
}
