//! Product moderation workflows.

use log::warn;

use crate::api::{ListSource, Mutation, MutationGateway};
use crate::domain::product::{Product, ProductStatus};
use crate::domain::session::AdminSession;
use crate::dto::listing::{ListPageData, ListParams, ListRedirect};
use crate::forms::products::ProductStatusForm;
use crate::listing::controller::ListLabels;
use crate::services::listing::{mutate_list, rejected, show_list};

pub const PRODUCT_LABELS: ListLabels = ListLabels {
    singular: "product",
    plural: "products",
};

pub async fn list_products<S>(
    source: &S,
    session: &AdminSession,
    params: &ListParams,
) -> ListPageData<Product>
where
    S: ListSource<Item = Product, Filter = ProductStatus>,
{
    show_list(source, session, PRODUCT_LABELS, params).await
}

pub async fn delete_product<S>(
    source: &S,
    session: &AdminSession,
    params: &ListParams,
    product_id: &str,
) -> ListRedirect
where
    S: ListSource<Item = Product, Filter = ProductStatus> + MutationGateway<Status = ProductStatus>,
{
    mutate_list(source, session, PRODUCT_LABELS, params, product_id, Mutation::Delete).await
}

/// Approves, rejects or resets a product to pending.
pub async fn update_product_status<S>(
    source: &S,
    session: &AdminSession,
    params: &ListParams,
    product_id: &str,
    form: ProductStatusForm,
) -> ListRedirect
where
    S: ListSource<Item = Product, Filter = ProductStatus> + MutationGateway<Status = ProductStatus>,
{
    match ProductStatus::try_from(form) {
        Ok(status) => {
            mutate_list(
                source,
                session,
                PRODUCT_LABELS,
                params,
                product_id,
                Mutation::UpdateStatus(status),
            )
            .await
        }
        Err(err) => {
            warn!("Rejected status for product {product_id}: {err}");
            rejected(params, PRODUCT_LABELS.status_failed())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::ListResult;
    use crate::services::listing::fakes::{FakeList, session};

    #[tokio::test]
    async fn unknown_status_is_rejected_before_the_backend() {
        let source: FakeList<Product, ProductStatus, ProductStatus> = FakeList::new(vec![]);
        let form = ProductStatusForm {
            status: "Sold".to_string(),
        };

        let outcome =
            update_product_status(&source, &session(), &ListParams::default(), "p1", form).await;

        assert!(source.mutations.borrow().is_empty());
        assert!(source.calls.borrow().is_empty());
        assert_eq!(
            outcome.notifications[0].message,
            "Failed to update product status. Please try again."
        );
    }

    #[tokio::test]
    async fn approved_status_is_sent_to_backend() {
        let source: FakeList<Product, ProductStatus, ProductStatus> =
            FakeList::new(vec![Ok(ListResult::new(vec![], 0))]);
        let form = ProductStatusForm {
            status: "Approved".to_string(),
        };

        let outcome =
            update_product_status(&source, &session(), &ListParams::default(), "p1", form).await;

        let mutations = source.mutations.borrow();
        assert_eq!(mutations.len(), 1);
        assert_eq!(mutations[0].1, Mutation::UpdateStatus(ProductStatus::Approved));
        assert_eq!(
            outcome.notifications[0].message,
            "Product status updated successfully"
        );
    }
}
