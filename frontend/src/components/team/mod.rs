//! Team members page: hosts the add-employee dialog.
//!
//! Owns the `open` flag and the in-memory roster. The dialog hands a
//! finished record to `Msg::EmployeeSaved` and asks for a close via
//! `Msg::CloseDialog`; persistence of the roster is someone else's job.

use common::model::employee::Employee;
use yew::prelude::*;

pub mod dialog;

use self::dialog::{AddEmployeeDialog, FIELDS};
use crate::toast::show_toast;

pub enum Msg {
    OpenDialog,
    CloseDialog,
    EmployeeSaved(Employee),
}

#[derive(Properties, PartialEq, Clone)]
pub struct TeamMembersProps {
    /// Signed-in account shown in the page header.
    pub user_email: String,
}

pub struct TeamMembersComponent {
    employees: Vec<Employee>,
    dialog_open: bool,
}

impl Component for TeamMembersComponent {
    type Message = Msg;
    type Properties = TeamMembersProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            employees: Vec::new(),
            dialog_open: false,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::OpenDialog => {
                self.dialog_open = true;
                true
            }
            Msg::CloseDialog => {
                self.dialog_open = false;
                true
            }
            Msg::EmployeeSaved(employee) => {
                self.employees.push(employee);
                show_toast("Employee saved.");
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        html! {
            <div style="max-width:960px;margin:0 auto;padding:24px;">
                <div style="display:flex;justify-content:space-between;align-items:center;margin-bottom:16px;">
                    <h1 style="margin:0;font-size:22px;">{ "Team Members" }</h1>
                    <span style="font-size:13px;color:#666;">{ ctx.props().user_email.clone() }</span>
                </div>

                <button
                    onclick={link.callback(|_| Msg::OpenDialog)}
                    style="padding:8px 20px;background:#1976d2;color:#fff;border:none;border-radius:4px;cursor:pointer;margin-bottom:16px;"
                >
                    { "Add Employee" }
                </button>

                { self.build_table() }

                <AddEmployeeDialog
                    open={self.dialog_open}
                    on_request_close={link.callback(|_| Msg::CloseDialog)}
                    on_save={link.callback(Msg::EmployeeSaved)}
                />
            </div>
        }
    }
}

impl TeamMembersComponent {
    fn build_table(&self) -> Html {
        if self.employees.is_empty() {
            return html! {
                <p style="color:#888;">{ "No employees yet." }</p>
            };
        }

        html! {
            <table style="width:100%;border-collapse:collapse;font-size:13px;">
                <thead>
                    <tr>
                        {
                            for FIELDS.iter().map(|spec| html! {
                                <th style="text-align:left;border-bottom:2px solid #ddd;padding:8px;">
                                    { spec.name }
                                </th>
                            })
                        }
                    </tr>
                </thead>
                <tbody>
                    { for self.employees.iter().map(employee_row) }
                </tbody>
            </table>
        }
    }
}

fn employee_row(employee: &Employee) -> Html {
    let cells = [
        &employee.emp_id,
        &employee.name,
        &employee.grade,
        &employee.designation,
        &employee.project,
        &employee.skills,
        &employee.location,
        &employee.contact_no,
    ];

    html! {
        <tr>
            {
                for cells.iter().map(|value| html! {
                    <td style="border-bottom:1px solid #eee;padding:8px;">{ (*value).clone() }</td>
                })
            }
        </tr>
    }
}
