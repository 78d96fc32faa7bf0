//! In-memory marketing content: pricing tiers, feature cards, docs.
//!
//! The site has no CMS; everything the marketing pages show is seeded here
//! at startup and shared behind an `Arc`. The step sequences back the
//! loading screens the product shows while a page settles.

use std::sync::Arc;

/// A pricing tier on the pricing page.
#[derive(Debug, Clone)]
pub struct PricingTier {
    pub name: String,
    /// Display price ("$29" or "Contact Us").
    pub price: String,
    pub features: Vec<String>,
    /// Marks the tier the page visually highlights.
    pub highlighted: bool,
}

/// A feature card on the features page.
#[derive(Debug, Clone)]
pub struct FeatureCard {
    pub title: String,
    pub description: String,
}

/// One documentation article.
#[derive(Debug, Clone)]
pub struct DocItem {
    pub title: String,
    pub content: String,
}

/// A named group of documentation articles.
#[derive(Debug, Clone)]
pub struct DocCategory {
    pub name: String,
    pub items: Vec<DocItem>,
}

/// A named sequence of onboarding/progress steps.
#[derive(Debug, Clone)]
pub struct StepSequence {
    pub key: &'static str,
    pub steps: Vec<String>,
}

/// Content store that holds all marketing content in memory.
#[derive(Debug, Clone)]
pub struct ContentStore {
    tiers: Arc<Vec<PricingTier>>,
    features: Arc<Vec<FeatureCard>>,
    docs: Arc<Vec<DocCategory>>,
    steps: Arc<Vec<StepSequence>>,
}

impl ContentStore {
    /// Build the store from the seeded content.
    #[must_use]
    pub fn seeded() -> Self {
        Self {
            tiers: Arc::new(pricing_tiers()),
            features: Arc::new(feature_cards()),
            docs: Arc::new(doc_categories()),
            steps: Arc::new(step_sequences()),
        }
    }

    /// The pricing tiers, cheapest first.
    #[must_use]
    pub fn pricing_tiers(&self) -> &[PricingTier] {
        &self.tiers
    }

    /// The feature cards in display order.
    #[must_use]
    pub fn feature_cards(&self) -> &[FeatureCard] {
        &self.features
    }

    /// The documentation categories, FAQ last.
    #[must_use]
    pub fn doc_categories(&self) -> &[DocCategory] {
        &self.docs
    }

    /// The step sequence registered under `key`, if any.
    #[must_use]
    pub fn steps(&self, key: &str) -> Option<&StepSequence> {
        self.steps.iter().find(|s| s.key == key)
    }
}

fn tier(name: &str, price: &str, highlighted: bool, features: &[&str]) -> PricingTier {
    PricingTier {
        name: name.to_string(),
        price: price.to_string(),
        features: features.iter().map(ToString::to_string).collect(),
        highlighted,
    }
}

fn pricing_tiers() -> Vec<PricingTier> {
    vec![
        tier(
            "Basic",
            "$0",
            false,
            &[
                "Limited document uploads",
                "AI-powered Q&A with citations",
                "Chat-scoped knowledge base",
                "Limited team members",
            ],
        ),
        tier(
            "Pro",
            "$29",
            true,
            &[
                "More team members",
                "Higher document limits",
                "Faster ingestion processing",
                "Conversation history & usage insights",
                "Email notifications for ingestion status",
            ],
        ),
        tier(
            "Enterprise",
            "Contact Us",
            false,
            &[
                "Unlimited users",
                "Custom document and storage limits",
                "Advanced security & tenant isolation",
                "Dedicated ingestion capacity",
                "Audit logs & compliance controls",
                "Priority support",
            ],
        ),
    ]
}

fn card(title: &str, description: &str) -> FeatureCard {
    FeatureCard {
        title: title.to_string(),
        description: description.to_string(),
    }
}

fn feature_cards() -> Vec<FeatureCard> {
    vec![
        card(
            "Instant AI Answers",
            "Ask questions in natural language and get accurate answers grounded in your internal documents.",
        ),
        card(
            "Knowledge Visibility",
            "Track document ingestion status, query history, and workspace activity with full transparency.",
        ),
        card(
            "Tenant-Isolated Security",
            "Workspace-level isolation, role-based access control, and scoped retrieval keep your data private.",
        ),
        card(
            "Usage-Aware SaaS",
            "Built with clear limits on documents and users, mirroring real SaaS plans without hidden complexity.",
        ),
        card(
            "Grounded & Explainable",
            "Every response is backed by source documents, reducing hallucinations and building trust.",
        ),
        card(
            "Production-Ready by Design",
            "Asynchronous ingestion, scalable APIs, and clean architecture built to grow with your team.",
        ),
    ]
}

fn doc(title: &str, content: &str) -> DocItem {
    DocItem {
        title: title.to_string(),
        content: content.to_string(),
    }
}

fn doc_categories() -> Vec<DocCategory> {
    vec![
        DocCategory {
            name: "Getting Started".to_string(),
            items: vec![
                doc(
                    "Creating a Workspace",
                    "Sign up using your email or supported OAuth providers. During onboarding, you'll create a workspace that represents your organization. Each workspace is fully isolated and acts as your private AI environment.",
                ),
                doc(
                    "Dashboard Overview",
                    "After onboarding, you'll land on the main dashboard. Here you can view document ingestion status, access the AI chat interface, review past conversations, and manage workspace settings.",
                ),
                doc(
                    "Navigating the Interface",
                    "Use the sidebar (or mobile menu) to switch between chat, documents, and settings. Workspace-level context is always preserved, ensuring all interactions remain scoped and secure.",
                ),
            ],
        },
        DocCategory {
            name: "Docs & Knowledge Base".to_string(),
            items: vec![
                doc(
                    "Uploading Documents",
                    "Admins can upload supported documents such as PDFs and text files to build the workspace knowledge base. Uploaded files are processed asynchronously and become searchable once ingestion is complete.",
                ),
                doc(
                    "Ingestion & Indexing",
                    "Documents go through text extraction, chunking, and semantic indexing in the background. You'll see clear status indicators so you know when documents are ready for querying.",
                ),
                doc(
                    "Document Limits",
                    "Each plan enforces limits on the number of documents and total storage per workspace. Basic plans limit the number of documents you can upload to 5 and total storage to 50MB, while Pro plans allow up to 25 documents and 250MB of storage. Enterprise plans can be customized based on your needs.",
                ),
            ],
        },
        DocCategory {
            name: "AI Querying".to_string(),
            items: vec![
                doc(
                    "Asking Questions",
                    "Use the chat interface to ask questions in natural language. LexiOps AI retrieves relevant context from your documents before generating an answer.",
                ),
                doc(
                    "Grounded Answers & Citations",
                    "All responses are grounded strictly in your workspace documents and include references to the source content used, helping reduce hallucinations and build trust.",
                ),
                doc(
                    "Conversation History",
                    "Your past conversations are saved and scoped to your workspace. This allows teams to revisit answers and maintain continuity across sessions.",
                ),
            ],
        },
        DocCategory {
            name: "Workspace & Access".to_string(),
            items: vec![
                doc(
                    "Inviting Team Members",
                    "Workspace admins can invite team members via email. Invited users join the existing workspace and inherit permissions based on their assigned role.",
                ),
                doc(
                    "Roles & Permissions",
                    "LexiOps AI supports role-based access control. Admins manage documents and members, while regular members can query the knowledge base.",
                ),
                doc(
                    "Preferences & Theme",
                    "Customize your experience by switching between light and dark modes and managing notification preferences directly from your profile.",
                ),
            ],
        },
        DocCategory {
            name: "FAQ".to_string(),
            items: vec![
                doc(
                    "How many team members are allowed per plan?",
                    "The Starter plan supports a limited number of 5 members per workspace, suitable for small teams. The Pro plan allows 25 members to collaborate within the same workspace.",
                ),
                doc(
                    "Who can upload documents?",
                    "Only workspace admins can upload and manage documents. This ensures that the knowledge base remains curated and trustworthy.",
                ),
                doc(
                    "Can I query documents while ingestion is in progress?",
                    "Querying is disabled until ingestion completes to ensure accurate and complete answers. You'll be notified once documents are fully indexed.",
                ),
                doc(
                    "Is my data shared across workspaces?",
                    "No. Each workspace is fully isolated. Documents, conversations, and embeddings are never shared across tenants.",
                ),
                doc(
                    "Can I delete documents or conversations?",
                    "Yes. Admins can remove documents from the workspace, and users can manage their conversation history based on workspace permissions.",
                ),
            ],
        },
    ]
}

fn sequence(key: &'static str, steps: &[&str]) -> StepSequence {
    StepSequence {
        key,
        steps: steps.iter().map(ToString::to_string).collect(),
    }
}

fn step_sequences() -> Vec<StepSequence> {
    vec![
        sequence(
            "hero",
            &[
                "Initializing workspace",
                "Loading product features",
                "Preparing your experience",
                "Almost ready",
            ],
        ),
        sequence(
            "auth",
            &[
                "Verifying credentials",
                "Securing your session",
                "Setting up your workspace",
                "Redirecting you",
            ],
        ),
        sequence(
            "onboarding",
            &[
                "Creating your workspace",
                "Configuring settings",
                "Finalizing setup",
                "Welcome to LexiOps",
            ],
        ),
        sequence(
            "document_upload",
            &[
                "Receiving documents",
                "Extracting content",
                "Indexing knowledge",
                "Documents ready to query",
            ],
        ),
        sequence(
            "chat",
            &[
                "Analyzing your question",
                "Retrieving relevant context",
                "Generating grounded answer",
                "Finalizing response",
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_content_counts() {
        let store = ContentStore::seeded();
        assert_eq!(store.pricing_tiers().len(), 3);
        assert_eq!(store.feature_cards().len(), 6);
        assert_eq!(store.doc_categories().len(), 5);
    }

    #[test]
    fn test_step_sequences_by_key() {
        let store = ContentStore::seeded();
        let onboarding = store.steps("onboarding").expect("onboarding steps");
        assert_eq!(onboarding.steps.len(), 4);
        assert_eq!(onboarding.steps[3], "Welcome to LexiOps");
        assert!(store.steps("missing").is_none());
    }

    #[test]
    fn test_pro_tier_is_highlighted() {
        let store = ContentStore::seeded();
        let highlighted: Vec<_> = store
            .pricing_tiers()
            .iter()
            .filter(|t| t.highlighted)
            .map(|t| t.name.as_str())
            .collect();
        assert_eq!(highlighted, vec!["Pro"]);
    }

    #[test]
    fn test_faq_is_last_category() {
        let store = ContentStore::seeded();
        assert_eq!(
            store.doc_categories().last().map(|c| c.name.as_str()),
            Some("FAQ")
        );
    }
}
