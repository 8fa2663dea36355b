//! # Foody API
//!
//! The caller-facing surface. Every operation takes a credential token,
//! resolves it through the [`IdentityResolver`] and acts for that caller only:
//! the cart operations never take a customer id, they use the caller's.
//!
//! Restaurant-side operations check the caller's role. An owner may act on
//! their own restaurants, an admin on any. Foods, ingredients and categories
//! are managed through the restaurant they belong to.

pub mod requests;

pub use requests::*;

use crate::clients::{
    CartClient, CategoryClient, FoodClient, IngredientClient, OrderClient, RestaurantClient,
    UserClient,
};
use crate::error::FoodyError;
use crate::identity::{Caller, IdentityResolver};
use crate::model::{
    Cart, CartItem, CartItemId, Category, CategoryCreate, CategoryKind, Food, FoodCreate,
    FoodFilter, FoodId, IngredientCreate, IngredientId, IngredientItem, Order, OrderId,
    Restaurant, RestaurantCreate, RestaurantId, RestaurantUpdate, Role, User, UserCreate,
    UserUpdate,
};
use crate::restaurant_actor::RestaurantError;
use crate::user_actor::UserError;
use actor_framework::ActorClient;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

#[derive(Clone)]
pub struct FoodyApi {
    identity: Arc<dyn IdentityResolver>,
    users: UserClient,
    restaurants: RestaurantClient,
    categories: CategoryClient,
    foods: FoodClient,
    ingredients: IngredientClient,
    carts: CartClient,
    orders: OrderClient,
}

impl FoodyApi {
    pub fn new(
        identity: Arc<dyn IdentityResolver>,
        users: UserClient,
        restaurants: RestaurantClient,
        categories: CategoryClient,
        foods: FoodClient,
        ingredients: IngredientClient,
        carts: CartClient,
        orders: OrderClient,
    ) -> Self {
        Self {
            identity,
            users,
            restaurants,
            categories,
            foods,
            ingredients,
            carts,
            orders,
        }
    }

    fn caller(&self, token: &str) -> Result<Caller, FoodyError> {
        let caller = self.identity.resolve_caller(token)?;
        debug!(user_id = %caller.user_id, role = %caller.role, "Caller resolved");
        Ok(caller)
    }

    /// Fetches the restaurant if `caller` may manage it.
    async fn managed_restaurant(
        &self,
        caller: &Caller,
        restaurant_id: RestaurantId,
    ) -> Result<Restaurant, FoodyError> {
        let restaurant = self.restaurants.fetch(restaurant_id).await?;
        let owns = caller.role == Role::RestaurantOwner && restaurant.owner_id == caller.user_id;
        if owns || caller.is_admin() {
            Ok(restaurant)
        } else {
            warn!(user_id = %caller.user_id, %restaurant_id, "Not allowed to manage restaurant");
            Err(FoodyError::Forbidden(format!(
                "{} does not manage {}",
                caller.user_id, restaurant_id
            )))
        }
    }

    /// Admins, the owner of the order's restaurant and, if `customer_allowed`,
    /// the customer who placed it. A restaurant that no longer exists has no
    /// owner, so only admins and the customer remain.
    async fn authorize_order(
        &self,
        caller: &Caller,
        order: &Order,
        customer_allowed: bool,
    ) -> Result<(), FoodyError> {
        if caller.is_admin() || (customer_allowed && order.customer_id == caller.user_id) {
            return Ok(());
        }
        match self.managed_restaurant(caller, order.restaurant_id).await {
            Ok(_) => Ok(()),
            Err(FoodyError::Restaurant(RestaurantError::NotFound(_))) => {
                warn!(
                    user_id = %caller.user_id,
                    order_id = %order.id,
                    "Order of a removed restaurant"
                );
                Err(FoodyError::Forbidden(format!(
                    "{} may not access {}",
                    caller.user_id, order.id
                )))
            }
            Err(e) => Err(e),
        }
    }

    // --- Accounts ---

    /// Registers a user, creates their cart and signs them in.
    ///
    /// Emails are unique; a second registration with the same email fails
    /// with `Conflict`.
    #[instrument(skip(self, params), fields(email = %params.email))]
    pub async fn register(&self, params: UserCreate) -> Result<Registration, FoodyError> {
        if self.users.find_by_email(&params.email).await?.is_some() {
            return Err(UserError::AlreadyExists(params.email).into());
        }
        let user = self.users.create_user(params).await?;
        self.carts.create_cart(user.id).await?;

        let token = self.identity.issue_token(&Caller {
            user_id: user.id,
            email: user.email.clone(),
            role: user.role,
        })?;
        info!(user_id = %user.id, role = %user.role, "Registered");
        Ok(Registration { user, token })
    }

    #[instrument(skip(self, token))]
    pub async fn profile(&self, token: &str) -> Result<User, FoodyError> {
        let caller = self.caller(token)?;
        Ok(self.users.fetch(caller.user_id).await?)
    }

    #[instrument(skip(self, token, update))]
    pub async fn update_profile(
        &self,
        token: &str,
        update: UserUpdate,
    ) -> Result<User, FoodyError> {
        let caller = self.caller(token)?;
        Ok(self.users.update_user(caller.user_id, update).await?)
    }

    /// Adds the restaurant to the caller's favorites, or removes it if it is
    /// already there. Returns whether it is now a favorite.
    #[instrument(skip(self, token))]
    pub async fn toggle_favorite(
        &self,
        token: &str,
        restaurant_id: RestaurantId,
    ) -> Result<bool, FoodyError> {
        let caller = self.caller(token)?;
        self.restaurants.fetch(restaurant_id).await?;
        Ok(self.users.toggle_favorite(caller.user_id, restaurant_id).await?)
    }

    // --- Catalog ---

    #[instrument(skip(self, token, request), fields(name = %request.name))]
    pub async fn create_restaurant(
        &self,
        token: &str,
        request: CreateRestaurantRequest,
    ) -> Result<Restaurant, FoodyError> {
        let caller = self.caller(token)?;
        if !matches!(caller.role, Role::RestaurantOwner | Role::Admin) {
            return Err(FoodyError::Forbidden(format!(
                "{} cannot register restaurants",
                caller.role
            )));
        }
        let restaurant = self
            .restaurants
            .create_restaurant(RestaurantCreate {
                owner_id: caller.user_id,
                name: request.name,
                description: request.description,
                cuisine_type: request.cuisine_type,
            })
            .await?;
        Ok(restaurant)
    }

    #[instrument(skip(self, token, update))]
    pub async fn update_restaurant(
        &self,
        token: &str,
        restaurant_id: RestaurantId,
        update: RestaurantUpdate,
    ) -> Result<Restaurant, FoodyError> {
        let caller = self.caller(token)?;
        self.managed_restaurant(&caller, restaurant_id).await?;
        Ok(self
            .restaurants
            .update_restaurant(restaurant_id, update)
            .await?)
    }

    /// Removes the restaurant with its foods, ingredients and categories.
    /// Placed orders stay with their customers.
    #[instrument(skip(self, token))]
    pub async fn delete_restaurant(
        &self,
        token: &str,
        restaurant_id: RestaurantId,
    ) -> Result<(), FoodyError> {
        let caller = self.caller(token)?;
        self.managed_restaurant(&caller, restaurant_id).await?;

        let foods = self.foods.menu(restaurant_id, FoodFilter::default()).await?;
        for food in &foods {
            self.foods.delete(food.id).await?;
        }
        let ingredients = self.ingredients.for_restaurant(restaurant_id).await?;
        for ingredient in &ingredients {
            self.ingredients.delete(ingredient.id).await?;
        }
        for kind in [CategoryKind::Food, CategoryKind::Ingredient] {
            for category in self.categories.for_restaurant(restaurant_id, kind).await? {
                self.categories.delete(category.id).await?;
            }
        }
        self.restaurants.delete(restaurant_id).await?;
        info!(
            %restaurant_id,
            foods = foods.len(),
            ingredients = ingredients.len(),
            "Restaurant deleted"
        );
        Ok(())
    }

    /// Opens or closes the restaurant. Returns whether it is now open.
    #[instrument(skip(self, token))]
    pub async fn toggle_restaurant_open(
        &self,
        token: &str,
        restaurant_id: RestaurantId,
    ) -> Result<bool, FoodyError> {
        let caller = self.caller(token)?;
        self.managed_restaurant(&caller, restaurant_id).await?;
        Ok(self.restaurants.toggle_open(restaurant_id).await?)
    }

    #[instrument(skip(self, token))]
    pub async fn search_restaurants(
        &self,
        token: &str,
        keyword: &str,
    ) -> Result<Vec<Restaurant>, FoodyError> {
        self.caller(token)?;
        Ok(self.restaurants.search(keyword).await?)
    }

    #[instrument(skip(self, token))]
    pub async fn all_restaurants(&self, token: &str) -> Result<Vec<Restaurant>, FoodyError> {
        self.caller(token)?;
        Ok(self.restaurants.all().await?)
    }

    #[instrument(skip(self, token, params), fields(restaurant_id = %params.restaurant_id, kind = %params.kind))]
    pub async fn create_category(
        &self,
        token: &str,
        params: CategoryCreate,
    ) -> Result<Category, FoodyError> {
        let caller = self.caller(token)?;
        self.managed_restaurant(&caller, params.restaurant_id).await?;
        Ok(self.categories.create_category(params).await?)
    }

    /// Food categories are public, ingredient categories need a manager.
    #[instrument(skip(self, token))]
    pub async fn restaurant_categories(
        &self,
        token: &str,
        restaurant_id: RestaurantId,
        kind: CategoryKind,
    ) -> Result<Vec<Category>, FoodyError> {
        let caller = self.caller(token)?;
        match kind {
            CategoryKind::Food => {
                self.restaurants.fetch(restaurant_id).await?;
            }
            CategoryKind::Ingredient => {
                self.managed_restaurant(&caller, restaurant_id).await?;
            }
        }
        Ok(self.categories.for_restaurant(restaurant_id, kind).await?)
    }

    #[instrument(skip(self, token, params), fields(restaurant_id = %params.restaurant_id))]
    pub async fn create_food(&self, token: &str, params: FoodCreate) -> Result<Food, FoodyError> {
        let caller = self.caller(token)?;
        self.managed_restaurant(&caller, params.restaurant_id).await?;
        Ok(self.foods.create_food(params).await?)
    }

    #[instrument(skip(self, token))]
    pub async fn restaurant_menu(
        &self,
        token: &str,
        restaurant_id: RestaurantId,
        filter: FoodFilter,
    ) -> Result<Vec<Food>, FoodyError> {
        self.caller(token)?;
        self.restaurants.fetch(restaurant_id).await?;
        Ok(self.foods.menu(restaurant_id, filter).await?)
    }

    /// Foods of every restaurant whose name or description contains
    /// `keyword`.
    #[instrument(skip(self, token))]
    pub async fn search_foods(&self, token: &str, keyword: &str) -> Result<Vec<Food>, FoodyError> {
        self.caller(token)?;
        Ok(self.foods.search(keyword).await?)
    }

    /// Returns whether the food is now available.
    #[instrument(skip(self, token))]
    pub async fn toggle_food_availability(
        &self,
        token: &str,
        food_id: FoodId,
    ) -> Result<bool, FoodyError> {
        let caller = self.caller(token)?;
        let food = self.foods.fetch(food_id).await?;
        self.managed_restaurant(&caller, food.restaurant_id).await?;
        Ok(self.foods.toggle_availability(food_id).await?)
    }

    /// Carts holding the food keep its last price. Placed orders are not
    /// affected.
    #[instrument(skip(self, token))]
    pub async fn delete_food(&self, token: &str, food_id: FoodId) -> Result<(), FoodyError> {
        let caller = self.caller(token)?;
        let food = self.foods.fetch(food_id).await?;
        self.managed_restaurant(&caller, food.restaurant_id).await?;
        self.foods.delete(food_id).await?;
        info!(%food_id, restaurant_id = %food.restaurant_id, "Food deleted");
        Ok(())
    }

    #[instrument(skip(self, token, params), fields(restaurant_id = %params.restaurant_id))]
    pub async fn create_ingredient(
        &self,
        token: &str,
        params: IngredientCreate,
    ) -> Result<IngredientItem, FoodyError> {
        let caller = self.caller(token)?;
        self.managed_restaurant(&caller, params.restaurant_id).await?;
        Ok(self.ingredients.create_ingredient(params).await?)
    }

    #[instrument(skip(self, token))]
    pub async fn restaurant_ingredients(
        &self,
        token: &str,
        restaurant_id: RestaurantId,
    ) -> Result<Vec<IngredientItem>, FoodyError> {
        let caller = self.caller(token)?;
        self.managed_restaurant(&caller, restaurant_id).await?;
        Ok(self.ingredients.for_restaurant(restaurant_id).await?)
    }

    /// Returns whether the ingredient is now in stock.
    #[instrument(skip(self, token))]
    pub async fn toggle_ingredient_stock(
        &self,
        token: &str,
        ingredient_id: IngredientId,
    ) -> Result<bool, FoodyError> {
        let caller = self.caller(token)?;
        let ingredient = self.ingredients.fetch(ingredient_id).await?;
        self.managed_restaurant(&caller, ingredient.restaurant_id).await?;
        Ok(self.ingredients.toggle_stock(ingredient_id).await?)
    }

    // --- Cart ---

    #[instrument(skip(self, token, request), fields(food_id = %request.food_id, quantity = request.quantity))]
    pub async fn add_to_cart(
        &self,
        token: &str,
        request: AddCartItemRequest,
    ) -> Result<CartItem, FoodyError> {
        let caller = self.caller(token)?;
        let item = self
            .carts
            .add_item(
                caller.user_id,
                request.food_id,
                request.quantity,
                request.ingredients,
            )
            .await?;
        Ok(item)
    }

    #[instrument(skip(self, token, request), fields(item_id = %request.cart_item_id))]
    pub async fn update_cart_item(
        &self,
        token: &str,
        request: UpdateCartItemRequest,
    ) -> Result<CartItem, FoodyError> {
        let caller = self.caller(token)?;
        let item = self
            .carts
            .update_item_quantity(caller.user_id, request.cart_item_id, request.quantity)
            .await?;
        Ok(item)
    }

    #[instrument(skip(self, token))]
    pub async fn remove_cart_item(
        &self,
        token: &str,
        item_id: CartItemId,
    ) -> Result<Cart, FoodyError> {
        let caller = self.caller(token)?;
        Ok(self.carts.remove_item(caller.user_id, item_id).await?)
    }

    #[instrument(skip(self, token))]
    pub async fn clear_cart(&self, token: &str) -> Result<Cart, FoodyError> {
        let caller = self.caller(token)?;
        Ok(self.carts.clear(caller.user_id).await?)
    }

    /// The caller's cart, priced now.
    #[instrument(skip(self, token))]
    pub async fn get_cart(&self, token: &str) -> Result<Cart, FoodyError> {
        let caller = self.caller(token)?;
        Ok(self.carts.get_cart(caller.user_id).await?)
    }

    // --- Orders ---

    /// Checks out the caller's cart.
    #[instrument(skip(self, token, request), fields(restaurant_id = %request.restaurant_id))]
    pub async fn create_order(
        &self,
        token: &str,
        request: OrderRequest,
    ) -> Result<Order, FoodyError> {
        let caller = self.caller(token)?;
        let order = self
            .orders
            .create_order(
                caller.user_id,
                request.restaurant_id,
                request.delivery_address,
            )
            .await?;
        Ok(order)
    }

    /// The caller's own orders, oldest first.
    #[instrument(skip(self, token))]
    pub async fn order_history(&self, token: &str) -> Result<Vec<Order>, FoodyError> {
        let caller = self.caller(token)?;
        Ok(self.orders.orders_for_customer(caller.user_id).await?)
    }

    #[instrument(skip(self, token))]
    pub async fn restaurant_orders(
        &self,
        token: &str,
        restaurant_id: RestaurantId,
        status: Option<&str>,
    ) -> Result<Vec<Order>, FoodyError> {
        let caller = self.caller(token)?;
        self.managed_restaurant(&caller, restaurant_id).await?;
        let orders = self
            .orders
            .orders_for_restaurant(restaurant_id, status)
            .await?;
        Ok(orders)
    }

    #[instrument(skip(self, token))]
    pub async fn update_order_status(
        &self,
        token: &str,
        order_id: OrderId,
        status: &str,
    ) -> Result<Order, FoodyError> {
        let caller = self.caller(token)?;
        let order = self.orders.find_by_id(order_id).await?;
        self.authorize_order(&caller, &order, false).await?;
        Ok(self.orders.update_status(order_id, status).await?)
    }

    /// Allowed for the order's customer, the owner of its restaurant and
    /// admins.
    #[instrument(skip(self, token))]
    pub async fn cancel_order(&self, token: &str, order_id: OrderId) -> Result<(), FoodyError> {
        let caller = self.caller(token)?;
        let order = self.orders.find_by_id(order_id).await?;
        self.authorize_order(&caller, &order, true).await?;
        self.orders.cancel(order_id).await?;
        info!(%order_id, "Order cancelled");
        Ok(())
    }

    #[instrument(skip(self, token))]
    pub async fn find_order(&self, token: &str, order_id: OrderId) -> Result<Order, FoodyError> {
        let caller = self.caller(token)?;
        let order = self.orders.find_by_id(order_id).await?;
        self.authorize_order(&caller, &order, true).await?;
        Ok(order)
    }
}
