//! Marketplace listing card.

use leptos::prelude::*;
use wire::Product;

#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let href = format!("/marketplace/{}", product.id);
    let price = if product.is_free() { "Free".to_owned() } else { product.price_label() };
    let downloads = match product.download_count {
        1 => "1 download".to_owned(),
        n => format!("{n} downloads"),
    };

    view! {
        <a class="product-card" href=href>
            {product
                .image_url
                .clone()
                .map(|src| view! { <img class="product-card__image" src=src alt=""/> })}
            <span class="product-card__name">{product.name.clone()}</span>
            {product.category.clone().map(|c| view! { <span class="product-card__category">{c}</span> })}
            <span class="product-card__price">{price}</span>
            <span class="product-card__downloads">{downloads}</span>
        </a>
    }
}
