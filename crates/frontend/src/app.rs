//! Leptos storefront application.
//!
//! `App` constructs the cart store and layout-tier signals once and passes
//! them down as props; components never reach for ambient context, so cart
//! UI without a store cannot compile.

use leptos::*;

use sweetshop_cart::{CartItem, CartStore};
use sweetshop_catalog::{CatalogClient, Product};
use sweetshop_layout::LayoutTier;

use crate::viewport::use_layout_tier;

/// Build-time-configured base path of the catalog source.
const CATALOG_BASE: &str = match option_env!("SWEETSHOP_CATALOG_BASE") {
    Some(base) => base,
    None => "",
};

/// Main application component.
#[component]
pub fn App() -> impl IntoView {
    let cart = create_rw_signal(CartStore::new());
    let layout = use_layout_tier();

    // One-shot catalog load; on failure the catalog stays empty.
    let client = CatalogClient::new(CATALOG_BASE);
    spawn_local(async move {
        match client.load().await {
            Ok(products) => cart.update(|store| store.replace_catalog(products)),
            Err(err) => web_sys::console::error_1(
                &format!("failed to load product catalog: {err}").into(),
            ),
        }
    });

    view! {
        <main class="main-content">
            <ProductColumn cart layout/>
            <CartPanel cart/>
        </main>
    }
}

/// Product grid with its heading.
#[component]
fn ProductColumn(
    cart: RwSignal<CartStore>,
    #[prop(into)] layout: Signal<LayoutTier>,
) -> impl IntoView {
    let products = move || cart.with(|store| store.products().cloned().collect::<Vec<_>>());

    view! {
        <section class="product-container">
            <h1>"Desserts"</h1>
            <div class="product-list">
                <For
                    each=products
                    key=|product| product.name().clone()
                    children=move |product| view! { <ProductCard cart layout product/> }
                />
            </div>
        </section>
    }
}

/// One product card: tier-appropriate image, info, add-to-cart control.
#[component]
fn ProductCard(
    cart: RwSignal<CartStore>,
    #[prop(into)] layout: Signal<LayoutTier>,
    product: Product,
) -> impl IntoView {
    let name = product.name().clone();
    let category = product.category().to_owned();
    let price = product.price();
    let images = product.images().clone();

    let quantity = {
        let name = name.clone();
        create_memo(move |_| cart.with(|store| store.quantity_of(&name)))
    };

    // Expanded-controls flag: view-local and ephemeral. The effect watches
    // the quantity itself, so removal from the cart panel collapses the
    // controls just like decrementing to zero on the card.
    let activated = create_rw_signal(false);
    create_effect(move |_| {
        if quantity.get() == 0 && activated.get_untracked() {
            activated.set(false);
        }
    });

    let set_quantity = Callback::new({
        let name = name.clone();
        move |next: i64| {
            cart.update(|store| {
                store
                    .set_quantity(&name, next)
                    .expect("quantities derived in the UI are non-negative")
            });
        }
    });

    let alt_name = name.clone();
    let image = move || images.for_tier(layout.get()).to_owned();
    let alt = move || format!("{alt_name} {}", layout.get());

    view! {
        <div class="product-card">
            <div class=move || {
                if activated.get() {
                    "item-display-content activate"
                } else {
                    "item-display-content"
                }
            }>
                <img src=image alt=alt/>
                <AddToCartControls activated quantity on_change=set_quantity/>
            </div>
            <div class="item-info">
                <h1>{name.to_string()}</h1>
                <p class="description">{category}</p>
                <p class="price">{price.to_string()}</p>
            </div>
        </div>
    }
}

/// Collapsed "Add to Cart" button, or the expanded −/count/+ controls.
#[component]
fn AddToCartControls(
    activated: RwSignal<bool>,
    quantity: Memo<i64>,
    on_change: Callback<i64>,
) -> impl IntoView {
    let add = move |_| {
        activated.set(true);
        on_change.call(1);
    };
    let decrease = move |_| on_change.call(quantity.get() - 1);
    let increase = move |_| on_change.call(quantity.get() + 1);

    view! {
        <Show
            when=move || activated.get()
            fallback=move || {
                view! {
                    <button class="add-to-cart-btn" on:click=add>
                        <span>"Add to Cart"</span>
                    </button>
                }
            }
        >
            <div class="add-to-cart-activated">
                <button class="decrease-quantity-btn" on:click=decrease>"-"</button>
                <span>{move || quantity.get()}</span>
                <button class="increase-quantity-btn" on:click=increase>"+"</button>
            </div>
        </Show>
    }
}

/// Cart panel: item list, running totals, confirm button.
#[component]
fn CartPanel(cart: RwSignal<CartStore>) -> impl IntoView {
    let totals = create_memo(move |_| cart.with(|store| store.totals()));

    view! {
        <aside class="cart-container">
            <div class="cart">
                <h1>"Your Cart (" {move || totals.get().total_quantity} ")"</h1>
                <Show
                    when=move || totals.get().total_quantity > 0
                    fallback=|| {
                        view! {
                            <div class="cart-empty-placeholder">
                                <p>"Your added items will appear here"</p>
                            </div>
                        }
                    }
                >
                    <ul class="cart-list">
                        <For
                            each=move || cart.with(|store| store.cart_items())
                            key=|item| (item.name.clone(), item.quantity)
                            children=move |item| view! { <CartLine cart item/> }
                        />
                    </ul>
                    <div class="order-total">
                        <span>"Order Total"</span>
                        <span class="total-price">
                            {move || totals.get().total_price.to_string()}
                        </span>
                    </div>
                    // Checkout is out of scope; the button is intentionally inert.
                    <button class="confirm-order-btn">"Confirm Order"</button>
                </Show>
            </div>
        </aside>
    }
}

/// One cart row; removal funnels through the same single mutation path.
#[component]
fn CartLine(cart: RwSignal<CartStore>, item: CartItem) -> impl IntoView {
    let name = item.name.clone();
    let remove = move |_| {
        cart.update(|store| {
            store
                .set_quantity(&name, 0)
                .expect("removal sets a zero quantity")
        });
    };

    view! {
        <li class="cart-list-item">
            <div class="cart-item-info">
                <p class="cart-item-name">{item.name.to_string()}</p>
                <p class="cart-item-pricing">
                    <span class="cart-item-quantity">{item.quantity} "x"</span>
                    <span class="cart-item-unit-price">"@ " {item.unit_price.to_string()}</span>
                    <span class="cart-item-total">{item.line_total.to_string()}</span>
                </p>
            </div>
            <button class="remove-item-btn" on:click=remove>"x"</button>
        </li>
    }
}
