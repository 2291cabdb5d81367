use crate::models::Clause;

pub const DEMO_DOCUMENT_NAME: &str = "Vendor_Service_Agreement_v4.pdf";

/// Clauses extracted from the sample vendor agreement used by `--demo`.
pub fn demo_clauses() -> Vec<Clause> {
    vec![
        Clause::new(
            "CL-01",
            "Indemnification",
            "The Vendor shall indemnify, verify, and hold harmless the Client against all claims...",
        ),
        Clause::new(
            "CL-05",
            "Governing Law",
            "This Agreement shall be governed by the laws of the State of California.",
        ),
        Clause::new(
            "CL-09",
            "Payment Terms",
            "Invoices are payable immediately upon receipt.",
        ),
    ]
}
