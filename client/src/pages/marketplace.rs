//! Marketplace listing, product detail, and product upload.

#[cfg(test)]
#[path = "marketplace_test.rs"]
mod marketplace_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};
use wire::{Id, Product};

use crate::components::product_card::ProductCard;
use crate::config::ClientConfig;
use crate::net::marketplace::{self as api, ProductUpload};
use crate::state::auth::AuthState;
use crate::state::toast::{ToastKind, ToastState, notify};
use crate::util::auth::install_unauth_redirect;
use crate::util::form::{non_blank, parse_route_id};
use crate::util::markdown::render_markdown_html;
use crate::util::task::{Fetched, redirect, spawn_action, spawn_into};

/// Search box value sent as `?search=`, or `None` for the full listing.
pub fn normalize_search(raw: &str) -> Option<String> {
    non_blank(raw)
}

pub fn validate_upload(name: &str, description: &str, price: &str, category: &str) -> Result<ProductUpload, &'static str> {
    let name = non_blank(name).ok_or("Give your product a name.")?;
    let price_cents = wire::parse_price(price).ok_or("Enter a price like 12.50 (no more than two decimals).")?;
    Ok(ProductUpload {
        name,
        description: description.trim().to_owned(),
        price_cents,
        category: non_blank(category),
    })
}

/// Purchasing is offered for paid products when payments are configured.
pub fn can_purchase(product: &Product, config: &ClientConfig) -> bool {
    config.payments_enabled() && !product.is_free()
}

#[component]
pub fn MarketplacePage() -> impl IntoView {
    let search = RwSignal::new(String::new());
    let products = RwSignal::<Fetched<Vec<Product>>>::new(None);

    let load = move |term: Option<String>| {
        products.set(None);
        spawn_into(products, async move { api::products(term.as_deref()).await });
    };
    Effect::new(move || load(None));

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        load(normalize_search(&search.get()));
    };

    view! {
        <section class="marketplace">
            <h1>"Marketplace"</h1>
            <form class="marketplace__search" on:submit=on_search>
                <input
                    type="search"
                    placeholder="Search products"
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                <button type="submit">"Search"</button>
            </form>
            {move || match products.get() {
                None => view! { <p class="loading">"Loading products..."</p> }.into_any(),
                Some(Err(e)) => view! { <p class="error">{e}</p> }.into_any(),
                Some(Ok(list)) if list.is_empty() => {
                    view! { <p class="marketplace__empty">"No products match."</p> }.into_any()
                }
                Some(Ok(list)) => {
                    view! {
                        <div class="marketplace__grid">
                            {list.into_iter().map(|product| view! { <ProductCard product/> }).collect_view()}
                        </div>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}

#[component]
pub fn ProductDetailPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let config = expect_context::<ClientConfig>();
    let params = use_params_map();
    let product = RwSignal::<Fetched<Product>>::new(None);
    let busy = RwSignal::new(false);

    Effect::new(move || match params.with(|p| parse_route_id(p.get("id").as_deref())) {
        Some(id) => spawn_into(product, api::product(id)),
        None => product.set(Some(Err("That product does not exist.".to_owned()))),
    });

    let on_download = move |id| {
        busy.set(true);
        spawn_action(async move {
            match api::download(id).await {
                Ok(link) => redirect(&link.download_url),
                Err(e) => notify(toasts, ToastKind::Error, format!("Download unavailable: {e}")),
            }
            busy.set(false);
        });
    };

    let on_purchase = move |id| {
        busy.set(true);
        spawn_action(async move {
            match api::purchase(id).await {
                Ok(checkout) => redirect(&checkout.checkout_url),
                Err(e) => notify(toasts, ToastKind::Error, format!("Checkout could not start: {e}")),
            }
            busy.set(false);
        });
    };

    view! {
        <section class="product">
            <a href="/marketplace">"← Marketplace"</a>
            {move || match product.get() {
                None => view! { <p class="loading">"Loading product..."</p> }.into_any(),
                Some(Err(e)) => view! { <p class="error">{e}</p> }.into_any(),
                Some(Ok(p)) => {
                    let id = p.id;
                    let purchasable = can_purchase(&p, &config);
                    let price = if p.is_free() { "Free".to_owned() } else { p.price_label() };
                    view! {
                        <h1>{p.name.clone()}</h1>
                        <p class="product__price">{price}</p>
                        {p.category.clone().map(|c| view! { <p class="product__category">{c}</p> })}
                        <div class="product__description" inner_html=render_markdown_html(&p.description)></div>
                        <p class="product__meta">
                            {format!("{} downloads · listed {}", p.download_count, p.created_at.short_label())}
                        </p>
                        <div class="product__actions">
                            <button type="button" disabled=move || busy.get() on:click=move |_| on_download(id)>
                                "Download"
                            </button>
                            <Show when=move || purchasable>
                                <button
                                    type="button"
                                    class="product__buy"
                                    disabled=move || busy.get()
                                    on:click=move |_| on_purchase(id)
                                >
                                    "Buy now"
                                </button>
                            </Show>
                        </div>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}

#[component]
pub fn ProductUploadPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();
    install_unauth_redirect(auth, navigate.clone());

    let uploaded = RwSignal::new(None::<Id>);
    Effect::new(move || {
        if let Some(id) = uploaded.get() {
            navigate(&format!("/marketplace/{id}"), NavigateOptions::default());
        }
    });

    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let price = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let file_input = NodeRef::<leptos::html::Input>::new();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let upload = match validate_upload(&name.get(), &description.get(), &price.get(), &category.get()) {
            Ok(upload) => upload,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        #[cfg(feature = "hydrate")]
        {
            let Some(file) = file_input.get().and_then(|input| input.files()).and_then(|files| files.get(0)) else {
                info.set("Choose the file buyers will download.".to_owned());
                return;
            };
            busy.set(true);
            info.set("Uploading...".to_owned());
            spawn_action(async move {
                match api::upload(&upload, file).await {
                    Ok(product) => {
                        notify(toasts, ToastKind::Success, format!("{} is live.", product.name));
                        uploaded.set(Some(product.id));
                    }
                    Err(e) => info.set(format!("Upload failed: {e}")),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (upload, uploaded, toasts);
        }
    };

    view! {
        <section class="product-upload">
            <h1>"Sell a product"</h1>
            <Show
                when=move || auth.get().is_developer()
                fallback=|| view! { <p>"Only developer accounts can list products."</p> }
            >
                <form class="product-upload__form" on:submit=on_submit>
                    <input
                        placeholder="Product name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <textarea
                        placeholder="Description (Markdown)"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                    <input
                        placeholder="Price in USD, 0 for free"
                        inputmode="decimal"
                        prop:value=move || price.get()
                        on:input=move |ev| price.set(event_target_value(&ev))
                    />
                    <input
                        placeholder="Category (optional)"
                        prop:value=move || category.get()
                        on:input=move |ev| category.set(event_target_value(&ev))
                    />
                    <input type="file" node_ref=file_input/>
                    <button type="submit" disabled=move || busy.get()>"Publish"</button>
                </form>
            </Show>
            <Show when=move || !info.get().is_empty()>
                <p class="form-message">{move || info.get()}</p>
            </Show>
        </section>
    }
}
