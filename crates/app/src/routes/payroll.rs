use crate::auth::use_capability;
use crate::components::status_badge;
use crate::use_data;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdClock, LdDollarSign, LdFileText, LdTrendingUp};
use dioxus_free_icons::Icon;
use shared_types::workforce::{format_currency, EmployeePay, PayrollSummary, Payslip};
use shared_types::Capability;
use shared_ui::{
    use_toast, Button, ButtonSize, ButtonVariant, Card, CardContent, CardDescription, CardHeader,
    CardTitle, TabContent, TabList, TabTrigger, Tabs, ToastOptions,
};

const REPORTS: [(&str, &str); 4] = [
    ("Monthly Payroll Report", "Detailed payroll summary"),
    ("CPF Contribution Report", "CPF filing documents"),
    ("IR8A Forms", "Annual tax declarations"),
    ("Overtime Analysis", "OT trends and patterns"),
];

#[component]
pub fn Payroll() -> Element {
    let data = use_data();
    let can_process = use_capability(Capability::ProcessPayroll);

    let summary = data.payroll_summary();
    let payslips = data.payslips();
    let employees = data.employee_pay();

    rsx! {
        div { class: "module-page",
            Tabs { default_value: "overview", horizontal: true,
                TabList {
                    TabTrigger { value: "overview", index: 0usize, "Overview" }
                    TabTrigger { value: "payslips", index: 1usize, "Payslips" }
                    TabTrigger { value: "employees", index: 2usize, "Employees" }
                    TabTrigger { value: "reports", index: 3usize, "Reports" }
                }
                TabContent { value: "overview", index: 0usize,
                    PayOverview { summary: summary }
                }
                TabContent { value: "payslips", index: 1usize,
                    PayslipHistory { payslips: payslips }
                }
                TabContent { value: "employees", index: 2usize,
                    if can_process {
                        EmployeePayroll { employees: employees }
                    } else {
                        Card {
                            CardContent {
                                p { class: "muted", "Employee payroll is managed by HR." }
                            }
                        }
                    }
                }
                TabContent { value: "reports", index: 3usize,
                    PayrollReports {}
                }
            }
        }
    }
}

#[component]
fn PayOverview(summary: PayrollSummary) -> Element {
    let gross = format_currency(summary.gross_pay());
    let net = format_currency(summary.net_pay());
    let basic = format_currency(summary.basic_salary);
    let overtime = format_currency(summary.overtime);
    let allowances = format_currency(summary.allowances);
    let cpf_employee = format_currency(summary.cpf_employee);
    let cpf_employer = format_currency(summary.cpf_employer);
    let cpf_total = format_currency(summary.cpf_total());
    let regular_hours = summary.working_days * 8;

    rsx! {
        Card {
            CardHeader {
                CardTitle {
                    Icon::<LdDollarSign> { icon: LdDollarSign, width: 18, height: 18 }
                    "Current Month Payroll"
                }
                CardDescription { "Current month earnings and deductions" }
            }
            CardContent {
                div { class: "tally-grid",
                    div { class: "tally green",
                        span { class: "tally-value", "S{gross}" }
                        span { class: "tally-label", "Gross Pay" }
                    }
                    div { class: "tally blue",
                        span { class: "tally-value", "S{net}" }
                        span { class: "tally-label", "Net Pay" }
                    }
                    div { class: "tally purple",
                        span { class: "tally-value", "{summary.working_days}" }
                        span { class: "tally-label", "Working Days" }
                    }
                    div { class: "tally yellow",
                        span { class: "tally-value", "{summary.overtime_hours}" }
                        span { class: "tally-label", "OT Hours" }
                    }
                }
                dl { class: "detail-rows",
                    div {
                        dt { "Basic Salary" }
                        dd { "S{basic}" }
                    }
                    div {
                        dt { "Overtime" }
                        dd { "S{overtime}" }
                    }
                    div {
                        dt { "Allowances" }
                        dd { "S{allowances}" }
                    }
                }
            }
        }

        Card {
            CardHeader {
                CardTitle { "CPF Contributions (Based on Singapore CPF Rules)" }
                CardDescription { "Monthly CPF calculations and contributions" }
            }
            CardContent {
                dl { class: "detail-rows",
                    div {
                        dt { "Employee Contribution" }
                        dd { "S{cpf_employee}" }
                    }
                    div {
                        dt { "Employer Contribution" }
                        dd { "S{cpf_employer}" }
                    }
                    div { class: "strong",
                        dt { "Total CPF" }
                        dd { "S{cpf_total}" }
                    }
                }
            }
        }

        Card {
            CardHeader {
                CardTitle {
                    Icon::<LdClock> { icon: LdClock, width: 18, height: 18 }
                    "Working Hours Summary"
                }
            }
            CardContent {
                dl { class: "detail-rows",
                    div {
                        dt { "Regular Hours" }
                        dd { "{regular_hours}h" }
                    }
                    div {
                        dt { "Overtime Hours" }
                        dd { "{summary.overtime_hours}h" }
                    }
                }
            }
        }
    }
}

#[component]
fn PayslipHistory(payslips: Vec<Payslip>) -> Element {
    rsx! {
        Card {
            CardHeader {
                CardTitle { "Payslip History" }
                CardDescription { "Download and view historical payslips" }
            }
            CardContent {
                div { class: "record-list",
                    for payslip in payslips {
                        PayslipRow { key: "{payslip.month}", payslip: payslip.clone() }
                    }
                }
            }
        }
    }
}

#[component]
fn PayslipRow(payslip: Payslip) -> Element {
    let toast = use_toast();
    let month = payslip.month.clone();
    let gross = format_currency(payslip.gross_pay);
    let net = format_currency(payslip.net_pay);
    let cpf = format_currency(payslip.cpf_total);

    rsx! {
        div { class: "record",
            div {
                p { class: "strong", "{payslip.month}" }
                p { class: "muted", "Gross S{gross} · Net S{net} · CPF S{cpf}" }
            }
            div { class: "record-actions",
                {status_badge(&payslip.status)}
                Button {
                    size: ButtonSize::Small,
                    variant: ButtonVariant::Outline,
                    onclick: move |_| {
                        toast.success(
                            format!("Payslip for {month} has been downloaded."),
                            ToastOptions::new(),
                        );
                    },
                    Icon::<LdFileText> { icon: LdFileText, width: 14, height: 14 }
                    "Download"
                }
            }
        }
    }
}

#[component]
fn EmployeePayroll(employees: Vec<EmployeePay>) -> Element {
    let toast = use_toast();

    rsx! {
        Card {
            CardHeader {
                div { class: "card-header-row",
                    div {
                        CardTitle { "Employee Payroll" }
                        CardDescription { "Manage employee payroll and calculations" }
                    }
                    Button {
                        onclick: move |_| {
                            toast.success(
                                "Monthly payroll has been processed successfully.".to_string(),
                                ToastOptions::new(),
                            );
                        },
                        "Process Payroll"
                    }
                }
            }
            CardContent {
                div { class: "table-scroll",
                    table { class: "data-table",
                        thead {
                            tr {
                                th { "Employee" }
                                th { "Basic Salary" }
                                th { "Overtime" }
                                th { "Gross Pay" }
                                th { "Status" }
                            }
                        }
                        tbody {
                            for employee in employees {
                                EmployeeRow { key: "{employee.id}", employee: employee.clone() }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn EmployeeRow(employee: EmployeePay) -> Element {
    let basic = format_currency(employee.basic_salary);
    let overtime = format_currency(employee.overtime);
    let gross = format_currency(employee.gross_pay);

    rsx! {
        tr {
            td {
                p { class: "strong", "{employee.name}" }
                p { class: "muted", "{employee.id}" }
            }
            td { "S{basic}" }
            td { "S{overtime}" }
            td { class: "strong", "S{gross}" }
            td { {status_badge(&employee.status)} }
        }
    }
}

#[component]
fn PayrollReports() -> Element {
    let toast = use_toast();

    rsx! {
        Card {
            CardHeader {
                CardTitle {
                    Icon::<LdTrendingUp> { icon: LdTrendingUp, width: 18, height: 18 }
                    "Payroll Reports & Analytics"
                }
                CardDescription { "Generate payroll reports and compliance documents" }
            }
            CardContent {
                div { class: "report-grid",
                    for (title, caption) in REPORTS {
                        Button {
                            key: "{title}",
                            variant: ButtonVariant::Outline,
                            class: "report-button",
                            onclick: move |_| {
                                toast.info(format!("{title} is being generated"), ToastOptions::new());
                            },
                            Icon::<LdFileText> { icon: LdFileText, width: 18, height: 18 }
                            span { class: "report-button-text",
                                span { class: "strong", "{title}" }
                                span { class: "muted", "{caption}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
