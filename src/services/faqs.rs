//! FAQ management workflows.
//!
//! The FAQ list is small and unpaginated: it is always fetched in full and
//! searched locally.

use log::{error, info};

use crate::api::{FaqReader, FaqWriter};
use crate::domain::faq::{Faq, NewFaq};
use crate::domain::session::AdminSession;
use crate::domain::types::RecordId;
use crate::dto::faqs::{FaqQuery, FaqsPageData};
use crate::forms::faqs::FaqForm;
use crate::listing::filter::filter_local;
use crate::listing::notify::Notification;
use crate::services::ServiceResult;

pub async fn show_faqs<R>(api: &R, query: &FaqQuery) -> FaqsPageData
where
    R: FaqReader + ?Sized,
{
    let search = query.search.as_deref().unwrap_or("").trim().to_string();

    let (faqs, notifications) = match api.list_faqs().await {
        Ok(faqs) => (faqs, vec![]),
        Err(err) => {
            error!("Failed to load FAQs: {err}");
            (
                vec![],
                vec![Notification::error("Failed to load FAQs. Please try again.")],
            )
        }
    };

    FaqsPageData {
        total: faqs.len(),
        faqs: filter_local(&faqs, &search, Faq::search_fields),
        search,
        notifications,
    }
}

pub async fn add_faq<W>(api: &W, session: &AdminSession, form: FaqForm) -> ServiceResult<()>
where
    W: FaqWriter + ?Sized,
{
    let faq = NewFaq::try_from(form)?;
    api.add_faq(session, &faq).await?;
    info!("FAQ added: {}", faq.question);
    Ok(())
}

pub async fn update_faq<W>(
    api: &W,
    session: &AdminSession,
    faq_id: &str,
    form: FaqForm,
) -> ServiceResult<()>
where
    W: FaqWriter + ?Sized,
{
    let faq_id = RecordId::new(faq_id)?;
    let faq = NewFaq::try_from(form)?;
    api.update_faq(session, &faq_id, &faq).await?;
    info!("FAQ {faq_id} updated");
    Ok(())
}

pub async fn delete_faq<W>(api: &W, session: &AdminSession, faq_id: &str) -> ServiceResult<()>
where
    W: FaqWriter + ?Sized,
{
    let faq_id = RecordId::new(faq_id)?;
    api.delete_faq(session, &faq_id).await?;
    info!("FAQ {faq_id} deleted");
    Ok(())
}
