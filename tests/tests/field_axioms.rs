//! Field laws over small prime fields, checked exhaustively

use gfcheck_api::Error;
use gfcheck_axioms::{check_distributivity, check_group_axioms, FieldVerifier, VerifyConfig};
use gfcheck_field::{FieldAddition, FieldElement, FieldMultiplication, PrimeField};
use gfcheck_tests::{small_fields, SMALL_COMPOSITES, SMALL_PRIMES};

#[test]
fn test_associativity_and_distributivity() {
    for gf in small_fields() {
        let elements = gf.elements();
        for a in &elements {
            for b in &elements {
                for c in &elements {
                    assert_eq!(
                        a.add(&b.add(c).unwrap()).unwrap(),
                        a.add(b).unwrap().add(c).unwrap()
                    );
                    assert_eq!(
                        a.mul(&b.mul(c).unwrap()).unwrap(),
                        a.mul(b).unwrap().mul(c).unwrap()
                    );
                    assert_eq!(
                        a.mul(&b.add(c).unwrap()).unwrap(),
                        a.mul(b).unwrap().add(&a.mul(c).unwrap()).unwrap()
                    );
                }
            }
        }
    }
}

#[test]
fn test_inverse_and_identities() {
    for gf in small_fields() {
        for a in gf.elements() {
            assert_eq!(a.add(&gf.zero()).unwrap(), a);
            assert_eq!(a.mul(&gf.one()).unwrap(), a);
        }
        for a in gf.nonzero_elements() {
            assert_eq!(a.mul(&a.invert().unwrap()).unwrap(), gf.one());
        }
    }
}

#[test]
fn test_group_axioms_for_small_primes() {
    for gf in small_fields() {
        let add = check_group_axioms(&gf.elements(), &FieldAddition).unwrap();
        assert!(add.closure && add.associativity && add.inverses, "GF({})", gf.modulus());
        assert_eq!(add.identity.map(|e| e.value()), Some(0));

        let mul = check_group_axioms(&gf.nonzero_elements(), &FieldMultiplication).unwrap();
        assert!(mul.closure && mul.associativity && mul.inverses, "GF({})", gf.modulus());
        assert_eq!(mul.identity.map(|e| e.value()), Some(1));

        let dist = check_distributivity(&gf.elements(), &FieldAddition, &FieldMultiplication).unwrap();
        assert!(dist.left && dist.right);
    }
}

#[test]
fn test_composite_four_fails_closure() {
    let z4 = PrimeField::new(4).unwrap();
    let mul = check_group_axioms(&z4.nonzero_elements(), &FieldMultiplication).unwrap();
    assert!(!mul.closure);
    assert!(!mul.is_group());
}

#[test]
fn test_composites_fail_closure_or_inverses() {
    for m in SMALL_COMPOSITES {
        let z = PrimeField::new(m).unwrap();
        let mul = check_group_axioms(&z.nonzero_elements(), &FieldMultiplication).unwrap();
        assert!(!mul.closure || !mul.inverses, "Z/{m}");
    }
}

#[test]
fn test_negative_input_reduces() {
    assert_eq!(FieldElement::new(-1, 5).unwrap(), FieldElement::new(4, 5).unwrap());
    assert_eq!(FieldElement::new(-13, 7).unwrap().value(), 1);
}

#[test]
fn test_division_by_zero() {
    for gf in small_fields() {
        for a in gf.elements() {
            assert_eq!(
                a.div(&gf.zero()),
                Err(Error::DivisionByZero { modulus: gf.modulus() })
            );
        }
    }
}

#[test]
fn test_division_round_trip() {
    for gf in small_fields() {
        for a in gf.elements() {
            for b in gf.nonzero_elements() {
                assert_eq!(a.mul(&b).unwrap().div(&b).unwrap(), a);
            }
        }
    }
}

#[test]
fn test_verifier_agrees_with_primality() {
    let verifier = FieldVerifier::default();

    for report in verifier.verify_all(&SMALL_PRIMES).unwrap() {
        assert!(report.is_field(), "{report}");
    }
    for report in verifier.verify_all(&SMALL_COMPOSITES).unwrap() {
        assert!(!report.is_field(), "{report}");
    }
}

#[test]
fn test_verifier_from_toml() {
    let config = VerifyConfig::from_toml_str(
        r#"
        moduli = [17, 18, 19]
        exhaustive_limit = 17
        samples = 512
        "#,
    )
    .unwrap();
    let reports = FieldVerifier::new(config).unwrap().verify_configured().unwrap();

    let verdicts: Vec<_> = reports.iter().map(|r| (r.modulus, r.is_field())).collect();
    assert_eq!(verdicts, vec![(17, true), (18, false), (19, true)]);
}
