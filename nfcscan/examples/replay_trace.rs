// Replay a recorded card trace through a scan session.
//
// Runs without hardware: the transport is a MockTransport scripted with the
// answers of a Mastercard test card. Run with `RUST_LOG=debug` to see the
// APDU exchange.

use anyhow::Context;
use nfcscan::prelude::*;
use nfcscan::transport::MockTransport;

const TRACE: &[&str] = &[
    "6f12840e325041592e5359532e4444463031a5009000", // SELECT PPSE
    "6a82",                                         // SELECT Visa
    "6f0b8407a0000000041010a5009000",               // SELECT Mastercard
    "770a820219809404080101009000",                 // GET PROCESSING OPTIONS
    "702d57115413330089020011d2512201000000000f5f2010544553542f43415244484f4c444552209f1f04303030309000",
];

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let tag = RawTag::new(
        "04a1b2c3d4e5f6",
        ["android.nfc.tech.IsoDep", "android.nfc.tech.NfcA"],
    );
    let mut mock = MockTransport::with_tag(tag);
    for answer in TRACE {
        mock.push_response(hex::decode(answer).context("bad trace line")?);
    }

    // This card wraps its record data in template 70
    let config = ScanConfig::builder().unwrap_record_template(true).build()?;
    let mut session = ScanSession::with_config(Box::new(mock), config).start();
    let handle = session.handle();
    let outcome = session.scan(&mut |event: ScanEvent| println!("  .. {:?}", event))?;
    assert!(!handle.is_scanning());

    match outcome {
        ScanOutcome::Completed(result) => {
            println!("category:     {}", result.category());
            println!("technology:   {} ({})", result.technology(), result.manufacturer());
            if let Some(card) = result.card_info() {
                println!("card number:  {}", card.pan);
                println!("expiry:       {}", card.expiry);
                println!("issuer:       {}", card.issuer);
                if let Some(name) = &card.cardholder_name {
                    println!("cardholder:   {}", name);
                }
            }
        }
        ScanOutcome::Failed(reason) => println!("scan failed: {}", reason),
        ScanOutcome::Cancelled => println!("scan cancelled"),
    }

    session.stop()?;
    Ok(())
}
