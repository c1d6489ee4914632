use gradecalc_core::{
    completion_ratio, element_grade, format_grade, overall_grade, remaining_credit, round_grade,
    unit_grade, Assessment, CourseElement, Decimal, Grade, MissingPolicy, OverallMode, Syllabus,
    Unit, Weight,
};
use rust_decimal_macros::dec;

fn w(value: Decimal) -> Weight {
    Weight::new(value).unwrap()
}

fn graded(weight: Decimal, grade: Decimal) -> Assessment {
    Assessment::new("Exam", w(weight)).graded(Grade::new(grade).unwrap())
}

fn ungraded(weight: Decimal) -> Assessment {
    Assessment::new("Exam", w(weight))
}

fn element(weight: Decimal, assessments: Vec<Assessment>) -> CourseElement {
    CourseElement::new("EC", w(weight), assessments)
}

fn unit(credit: Decimal, elements: Vec<CourseElement>) -> Unit {
    Unit::new("UE", w(credit), w(dec!(1)), elements)
}

#[test]
fn unit_grade_weights_elements_by_coefficient() {
    let unit = unit(
        dec!(6),
        vec![
            element(dec!(1), vec![graded(dec!(1), dec!(15))]),
            element(dec!(3), vec![graded(dec!(2), dec!(4)), graded(dec!(2), dec!(6))]),
        ],
    );

    assert_eq!(unit_grade(&unit, MissingPolicy::Skip), Some(dec!(7.5)));
    assert_eq!(format_grade(unit_grade(&unit, MissingPolicy::Skip)), "7.5");
}

#[test]
fn current_and_projected_overall_for_half_graded_program() {
    let syllabus = Syllabus::new(vec![
        unit(dec!(3), vec![element(dec!(1), vec![graded(dec!(2), dec!(10))])]),
        unit(dec!(3), vec![element(dec!(1), vec![ungraded(dec!(1))])]),
    ]);

    assert_eq!(overall_grade(&syllabus, OverallMode::Current), Some(dec!(10)));
    assert_eq!(overall_grade(&syllabus, OverallMode::Projected), Some(dec!(10)));
}

#[test]
fn ungraded_unit_is_excluded_from_current_overall() {
    let syllabus = Syllabus::new(vec![
        unit(dec!(2), vec![element(dec!(1), vec![graded(dec!(1), dec!(18))])]),
        unit(
            dec!(10),
            vec![
                element(dec!(1), vec![ungraded(dec!(1))]),
                element(dec!(2), vec![ungraded(dec!(3))]),
            ],
        ),
    ]);

    assert_eq!(unit_grade(&syllabus.units[1], MissingPolicy::Skip), None);
    assert_eq!(overall_grade(&syllabus, OverallMode::Current), Some(dec!(18)));
    assert_eq!(remaining_credit(&syllabus), dec!(10));
}

#[test]
fn zero_graded_unit_counts_in_current_overall() {
    let syllabus = Syllabus::new(vec![
        unit(dec!(2), vec![element(dec!(1), vec![graded(dec!(1), dec!(18))])]),
        unit(dec!(2), vec![element(dec!(1), vec![graded(dec!(1), dec!(0))])]),
    ]);

    assert_eq!(overall_grade(&syllabus, OverallMode::Current), Some(dec!(9)));
}

#[test]
fn projection_substitutes_placeholder_inside_partially_graded_units() {
    let syllabus = Syllabus::new(vec![unit(
        dec!(4),
        vec![element(dec!(1), vec![graded(dec!(1), dec!(16)), ungraded(dec!(1))])],
    )]);

    assert_eq!(overall_grade(&syllabus, OverallMode::Current), Some(dec!(16)));
    assert_eq!(overall_grade(&syllabus, OverallMode::Projected), Some(dec!(13)));
}

#[test]
fn zero_weight_program_resolves_to_no_grade() {
    let syllabus = Syllabus::new(vec![unit(
        dec!(3),
        vec![element(dec!(0), vec![graded(dec!(1), dec!(12))])],
    )]);

    assert_eq!(unit_grade(&syllabus.units[0], MissingPolicy::Skip), None);
    assert_eq!(overall_grade(&syllabus, OverallMode::Current), None);
    assert_eq!(format_grade(overall_grade(&syllabus, OverallMode::Current)), "N/A");
    // Degenerate units take the placeholder like any other ungraded unit.
    assert_eq!(overall_grade(&syllabus, OverallMode::Projected), Some(dec!(10)));
}

#[test]
fn rounding_happens_once_at_formatting() {
    // EC1 = (13 + 14 + 14) / 3 = 13.666..., EC2 = 11
    // unit = (13.666... * 1 + 11 * 2) / 3 = 11.888...
    let first = unit(
        dec!(5),
        vec![
            element(
                dec!(1),
                vec![
                    graded(dec!(1), dec!(13)),
                    graded(dec!(1), dec!(14)),
                    graded(dec!(1), dec!(14)),
                ],
            ),
            element(dec!(2), vec![graded(dec!(1), dec!(11))]),
        ],
    );
    // unit = 10.3333...
    let second = unit(
        dec!(1),
        vec![element(dec!(1), vec![graded(dec!(2), dec!(10)), graded(dec!(1), dec!(11))])],
    );
    let syllabus = Syllabus::new(vec![first, second]);

    // Exact: (107/9 * 5 + 31/3 * 1) / 6 = 628/54 = 11.629629...
    let overall = overall_grade(&syllabus, OverallMode::Current).unwrap();
    assert_eq!(round_grade(overall), dec!(11.62963));
    assert_eq!(format_grade(Some(overall)), "11.62963");

    // Intermediate layers keep their guard digits.
    let ec1 = element_grade(&syllabus.units[0].elements[0], MissingPolicy::Skip).unwrap();
    assert_ne!(ec1, round_grade(ec1));
    let ue1 = unit_grade(&syllabus.units[0], MissingPolicy::Skip).unwrap();
    assert_ne!(ue1, round_grade(ue1));
}

#[test]
fn identical_snapshots_give_bit_identical_results() {
    let syllabus = Syllabus::new(vec![
        unit(
            dec!(7),
            vec![element(
                dec!(3),
                vec![graded(dec!(1), dec!(13.25)), graded(dec!(7), dec!(9))],
            )],
        ),
        unit(
            dec!(11),
            vec![
                element(dec!(1), vec![graded(dec!(1), dec!(17))]),
                element(dec!(1), vec![ungraded(dec!(2))]),
            ],
        ),
    ]);
    let copy = syllabus.clone();

    for mode in [
        OverallMode::Current,
        OverallMode::Projected,
        OverallMode::Secured,
        OverallMode::Ceiling,
    ] {
        let first = overall_grade(&syllabus, mode).unwrap();
        let second = overall_grade(&copy, mode).unwrap();
        assert_eq!(first.serialize(), second.serialize());
    }
}

#[test]
fn completion_ratio_ignores_weights() {
    let syllabus = Syllabus::new(vec![unit(
        dec!(3),
        vec![element(
            dec!(1),
            vec![
                graded(dec!(10), dec!(12)),
                ungraded(dec!(1)),
                ungraded(dec!(1)),
                ungraded(dec!(1)),
            ],
        )],
    )]);

    assert_eq!(completion_ratio(&syllabus), dec!(0.25));
}
