//! Article-level orchestration of the two-phase resolution.
//!
//! Mentions are grouped by source article. Within one article, phase one
//! resolves every mention as a country in original order, accumulating the
//! resolved country codes into the article's context. Phase two then revisits
//! only the still-unresolved mentions under a bias built from that context.
//! A mention resolved in phase one is never re-queried.
//!
//! Articles are independent units of context, so the dataset pass may run
//! them concurrently on a bounded pool; the lookup cache coalesces racing
//! lookups on the same key. Phase ordering is preserved within each article.

#[cfg(test)]
mod tests;

use std::collections::hash_map::Entry;
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use futures_util::stream::{self, StreamExt, TryStreamExt};
use tracing::{debug, info};

use crate::bias::CountryBiasBuilder;
use crate::dataset::Annotation;
use crate::gazetteer::{GazetteerClient, GazetteerError};
use crate::resolver::{Resolver, UNRESOLVED};

/// Runs the two-phase resolution over annotation groups.
pub struct ArticleProcessor<G> {
    resolver: Arc<Resolver<G>>,
    bias_builder: CountryBiasBuilder,
    max_concurrency: usize,
}

impl<G: GazetteerClient> ArticleProcessor<G> {
    /// Creates a processor running up to `max_concurrency` articles at once.
    pub fn new(
        resolver: Arc<Resolver<G>>,
        bias_builder: CountryBiasBuilder,
        max_concurrency: usize,
    ) -> Self {
        Self {
            resolver,
            bias_builder,
            max_concurrency,
        }
    }

    /// Resolves one article's mentions, returning predicted identifiers in
    /// the same order.
    pub async fn process_article(
        &self,
        mentions: &[Annotation],
    ) -> Result<Vec<u64>, GazetteerError> {
        let mut predicted = vec![UNRESOLVED; mentions.len()];
        let mut context = BTreeSet::new();

        // Phase one: countries resolve cheaply, and their codes become the
        // article's geographic context.
        for (slot, mention) in predicted.iter_mut().zip(mentions) {
            let resolution = self.resolver.resolve_country(&mention.toponym).await?;
            *slot = resolution.id;
            if let Some(code) = resolution.country_code {
                context.insert(code);
            }
        }

        let bias = self.bias_builder.build(&context);
        debug!(bias = %bias, countries = context.len(), "article context built");

        // Phase two: only what phase one left unresolved.
        for (slot, mention) in predicted.iter_mut().zip(mentions) {
            if *slot == UNRESOLVED {
                *slot = self
                    .resolver
                    .resolve_with_bias(&mention.toponym, &bias)
                    .await?;
            }
        }

        Ok(predicted)
    }

    /// Resolves a full dataset, grouping by article, and returns predicted
    /// identifiers aligned with the input rows.
    ///
    /// A transport failure from the gazetteer aborts the whole pass; nothing
    /// is persisted for the articles already processed.
    pub async fn process_dataset(
        &self,
        annotations: &[Annotation],
    ) -> Result<Vec<u64>, GazetteerError> {
        let groups = group_by_article(annotations);
        info!(
            articles = groups.len(),
            annotations = annotations.len(),
            "processing dataset"
        );

        let jobs = groups.into_iter().map(|(article_id, indices)| {
            let mentions: Vec<Annotation> =
                indices.iter().map(|&i| annotations[i].clone()).collect();
            async move {
                info!(article_id = %article_id, mentions = mentions.len(), "processing article");
                let ids = self.process_article(&mentions).await?;
                Ok::<_, GazetteerError>((indices, ids))
            }
        });

        let resolved: Vec<(Vec<usize>, Vec<u64>)> = stream::iter(jobs)
            .buffer_unordered(self.max_concurrency.max(1))
            .try_collect()
            .await?;

        let mut predicted = vec![UNRESOLVED; annotations.len()];
        for (indices, ids) in resolved {
            for (index, id) in indices.into_iter().zip(ids) {
                predicted[index] = id;
            }
        }

        Ok(predicted)
    }

    /// Resolves every annotation with the plain baseline query, ignoring
    /// article context entirely.
    pub async fn baseline_pass(
        &self,
        annotations: &[Annotation],
    ) -> Result<Vec<u64>, GazetteerError> {
        info!(annotations = annotations.len(), "baseline pass");

        let mut predicted = Vec::with_capacity(annotations.len());
        for annotation in annotations {
            predicted.push(self.resolver.resolve_baseline(&annotation.toponym).await?);
        }

        Ok(predicted)
    }

    /// Returns the underlying resolver.
    pub fn resolver(&self) -> &Resolver<G> {
        &self.resolver
    }
}

/// Groups row indices by article id, preserving first-appearance order of
/// articles and input order of rows within each article.
fn group_by_article(annotations: &[Annotation]) -> Vec<(String, Vec<usize>)> {
    let mut order: Vec<String> = Vec::new();
    let mut groups: HashMap<String, Vec<usize>> = HashMap::new();

    for (index, annotation) in annotations.iter().enumerate() {
        match groups.entry(annotation.article_id.clone()) {
            Entry::Occupied(mut entry) => entry.get_mut().push(index),
            Entry::Vacant(entry) => {
                order.push(annotation.article_id.clone());
                entry.insert(vec![index]);
            }
        }
    }

    order
        .into_iter()
        .map(|id| {
            let indices = groups.remove(&id).unwrap_or_default();
            (id, indices)
        })
        .collect()
}
