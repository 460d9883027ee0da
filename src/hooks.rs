/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

//! Data-fetch layer for the content sections. Each hook wraps a server
//! function in a local resource; sections read the `loading` flag and the
//! fetched snapshot from the resource. Fetch failures degrade to a blank
//! render rather than an error state.

use crate::content::{CompanyInfo, FaqItem, ServiceItem};
use leptos::*;

#[server(GetCompanyInfo, "/api", "GetJSON")]
pub async fn get_company_info() -> Result<CompanyInfo, ServerFnError> {
    Ok(crate::content::company_info())
}

#[server(GetFaqs, "/api", "GetJSON")]
pub async fn get_faqs() -> Result<Vec<FaqItem>, ServerFnError> {
    Ok(crate::content::faqs())
}

#[server(GetServices, "/api", "GetJSON")]
pub async fn get_services() -> Result<Vec<ServiceItem>, ServerFnError> {
    Ok(crate::content::services())
}

pub fn use_company_info() -> Resource<(), Option<CompanyInfo>> {
    create_local_resource(
        || (),
        |_| async {
            match get_company_info().await {
                Ok(info) => Some(info),
                Err(err) => {
                    log::warn!("failed to fetch company info: {err}");
                    None
                }
            }
        },
    )
}

pub fn use_faqs() -> Resource<(), Vec<FaqItem>> {
    create_local_resource(
        || (),
        |_| async {
            match get_faqs().await {
                Ok(faqs) => faqs,
                Err(err) => {
                    log::warn!("failed to fetch FAQs: {err}");
                    Vec::new()
                }
            }
        },
    )
}

pub fn use_services() -> Resource<(), Vec<ServiceItem>> {
    create_local_resource(
        || (),
        |_| async {
            match get_services().await {
                Ok(services) => services,
                Err(err) => {
                    log::warn!("failed to fetch services: {err}");
                    Vec::new()
                }
            }
        },
    )
}
