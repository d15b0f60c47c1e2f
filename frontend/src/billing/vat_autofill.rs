use std::cell::Cell;
use std::rc::Rc;
use log::{debug, error, info};
use crate::billing::vat_client::VatLookup;
use crate::billing::vat_models::{AutofillPatch, VatLookupRequest};

/// Runs VAT lookups for the billing form. Every focus loss issues at most one
/// request; an answer is handed back only if no focus loss happened since.
pub struct VatAutofill<L> {
    lookup: Rc<L>,
    issued: Rc<Cell<u64>>,
}

impl<L> Clone for VatAutofill<L> {
    fn clone(&self) -> Self {
        VatAutofill {
            lookup: self.lookup.clone(),
            issued: self.issued.clone(),
        }
    }
}

impl<L: VatLookup> VatAutofill<L> {
    pub fn new(lookup: L) -> Self {
        VatAutofill {
            lookup: Rc::new(lookup),
            issued: Rc::new(Cell::new(0)),
        }
    }

    pub async fn on_focus_out(
        &self,
        country_code: &str,
        vat_number: &str,
        csrf_token: &str,
    ) -> Option<AutofillPatch> {
        // Every focus loss supersedes earlier lookups, even one that sends nothing
        let sequence = self.issued.get() + 1;
        self.issued.set(sequence);

        let request = VatLookupRequest::from_inputs(country_code, vat_number, csrf_token)?;

        let result = self.lookup.lookup(&request).await;

        if self.issued.get() != sequence {
            debug!("Dropping stale VAT lookup for {}", request.vat);
            return None;
        }

        match result {
            Ok(result) => {
                let patch = AutofillPatch::from_result(&result);
                if patch.is_some() {
                    debug!(
                        "VAT {} confirmed as {}{}",
                        request.vat,
                        result.country_code.as_deref().unwrap_or(""),
                        result.vat_number.as_deref().unwrap_or("")
                    );
                } else {
                    info!(
                        "VAT {} is not valid (fault: {} {})",
                        request.vat,
                        result.fault_code.as_deref().unwrap_or("-"),
                        result.fault_message.as_deref().unwrap_or("-")
                    );
                }
                patch
            }
            Err(e) => {
                error!("VAT lookup for {} failed: {}", request.vat, e);
                None
            }
        }
    }
}
