use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;

use crate::models::{
    add_on::{AddOn, AddOnKey},
    catalog::{self, Offer, Resort, OFFERS, PACKAGES},
};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ResortDetails {
    #[serde(flatten)]
    resort: &'static Resort,
    package_name: &'static str,
}

pub async fn get_packages() -> impl Responder {
    HttpResponse::Ok().json(&PACKAGES)
}

pub async fn get_package(path: web::Path<String>) -> impl Responder {
    let id = path.into_inner();
    match catalog::find_package(&id) {
        Some(package) => HttpResponse::Ok().json(package),
        None => HttpResponse::NotFound().json(serde_json::json!({ "error": "Package not found" })),
    }
}

pub async fn get_resort(path: web::Path<String>) -> impl Responder {
    let slug = path.into_inner();
    match catalog::find_resort(&slug) {
        Some(resort) => {
            let package = catalog::package_for_resort(resort);
            HttpResponse::Ok().json(ResortDetails {
                resort,
                package_name: package.name,
            })
        }
        None => HttpResponse::NotFound().json(serde_json::json!({ "error": "Resort not found" })),
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OfferDetails {
    #[serde(flatten)]
    offer: &'static Offer,
    package_name: Option<&'static str>,
}

pub async fn get_offers() -> impl Responder {
    HttpResponse::Ok().json(&OFFERS)
}

pub async fn get_offer(path: web::Path<String>) -> impl Responder {
    let slug = path.into_inner();
    match catalog::find_offer(&slug) {
        Some(offer) => HttpResponse::Ok().json(OfferDetails {
            offer,
            package_name: catalog::find_package(offer.package_id).map(|p| p.name),
        }),
        None => HttpResponse::NotFound().json(serde_json::json!({ "error": "Offer not found" })),
    }
}

pub async fn get_add_ons() -> impl Responder {
    let add_ons: Vec<AddOn> = AddOnKey::ALL.into_iter().map(AddOn::from).collect();
    HttpResponse::Ok().json(add_ons)
}
